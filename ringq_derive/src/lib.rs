use proc_macro::TokenStream;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream}, parse_macro_input, Data, DataStruct, DeriveInput, Fields, Ident, LitStr, Token, Type, TypePath
};

struct RingEntryAttribute {
    crate_path: syn::Path,
}

/// Parses the attribute in the format: `crate_path = "path::to::crate"`.
impl Parse for RingEntryAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let key: Ident = input.parse()?;
        if key != "crate_path" {
            return Err(syn::Error::new(key.span(), "expected attribute `crate_path`"));
        }

        let _: Token![=] = input.parse()?;
        let value: LitStr = input.parse()?;
        let path: syn::Path = value.parse()?;

        Ok(RingEntryAttribute { crate_path: path })
    }
}

/// Derive macro for types that embed a ring link.
///
/// The struct must have a named field called `link` of type `RingLink`.
/// The generated impl recovers the embedding struct from a pointer to that
/// field via its offset, so the field may sit anywhere in the struct.
#[proc_macro_derive(RingEntry, attributes(ring_entry))]
pub fn ring_entry_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // Find absolute crate path
    let mut crate_path = quote! { ::ringq };

    for attr in &input.attrs {
        if attr.path().is_ident("ring_entry") {
            match attr.parse_args::<RingEntryAttribute>() {
                Ok(entry_attr) => {
                    let path = entry_attr.crate_path;
                    crate_path = quote! { #path };
                    break;
                }
                Err(e) => return e.to_compile_error().into(),
            }
        }
    }

    let ring_path = quote! { #crate_path::ring };

    let mut link_field = None;

    if let Data::Struct(DataStruct {
        fields: Fields::Named(ref fields),
        ..
    }) = input.data
    {
        for field in fields.named.iter() {
            if let Some(ident) = &field.ident {
                if ident == "link" {
                    link_field = Some(field.clone());
                }
            }
        }
    } else {
        return syn::Error::new_spanned(
            input,
            "RingEntry derive macro only supports structs with named fields",
        )
        .to_compile_error()
        .into();
    };

    let link_field = match link_field {
        Some(field) => field,
        None => {
            return syn::Error::new_spanned(struct_name, "Struct must have a field named 'link'")
                .to_compile_error()
                .into();
        }
    };
    let link_type = &link_field.ty;

    let type_ident = if let Type::Path(TypePath { path, .. }) = link_type {
        path.segments
            .last()
            .expect("Expected at least one segment in the type path")
            .ident
            .clone()
    } else {
        return syn::Error::new_spanned(link_type, "Field 'link' must be a RingLink")
            .to_compile_error()
            .into();
    };

    if type_ident != "RingLink" {
        return syn::Error::new_spanned(type_ident, "Field 'link' must be a RingLink")
            .to_compile_error()
            .into();
    }

    let expanded = quote! {
        unsafe impl #impl_generics #ring_path::traits::RingEntry for #struct_name #ty_generics #where_clause {
            #[inline]
            fn link(&self) -> &#ring_path::link::RingLink {
                &self.link
            }

            #[inline]
            fn link_mut(&mut self) -> &mut #ring_path::link::RingLink {
                &mut self.link
            }

            #[inline]
            unsafe fn entry_of(link: ::core::ptr::NonNull<#ring_path::link::RingLink>) -> ::core::ptr::NonNull<Self> {
                let offset = ::core::mem::offset_of!(Self, link);
                // The caller vouches that `link` is the `link` field of a
                // live value of this type.
                unsafe {
                    ::core::ptr::NonNull::new_unchecked(
                        link.as_ptr().cast::<u8>().sub(offset).cast::<Self>(),
                    )
                }
            }
        }
    };

    TokenStream::from(expanded)
}
