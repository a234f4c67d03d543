extern crate proc_macro;

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Ident};

/// Find the primitive named in `#[repr(..)]`, e.g. `u16` for `ProtocolVersion`.
fn repr_type(input: &DeriveInput) -> Option<Ident> {
    let mut repr = None;
    for attr in input.attrs.iter().filter(|a| a.path().is_ident("repr")) {
        let _ = attr.parse_nested_meta(|meta| {
            if let Some(ident) = meta.path.get_ident() {
                if ident.to_string().starts_with('u') {
                    repr = Some(ident.clone());
                }
            }
            Ok(())
        });
    }
    repr
}

/// Implement `crate::codec::DecodeValue` for a fieldless enum.
///
/// The enum must be `#[repr(uN)]`, derive `strum::EnumIter` and have a
/// `byte_value()` method returning the repr primitive. For `ProtocolVersion`
/// the generated code looks like
/// ```ignore
/// impl crate::codec::DecodeValue for ProtocolVersion {
///     fn decode_from(buffer: &[u8]) -> std::io::Result<(Self, &[u8])> {
///         let (value, buffer) = <u16 as crate::codec::DecodeValue>::decode_from(buffer)?;
///         match <Self as strum::IntoEnumIterator>::iter().find(|v| v.byte_value() == value) {
///             Some(variant) => Ok((variant, buffer)),
///             None => Err(/* InvalidData */),
///         }
///     }
/// }
/// ```
#[proc_macro_derive(DecodeEnum)]
pub fn derive_decode_enum(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let enum_name = input.ident.clone();

    if !matches!(input.data, Data::Enum(_)) {
        return syn::Error::new_spanned(&enum_name, "DecodeEnum only supports enums")
            .to_compile_error()
            .into();
    }

    let Some(repr) = repr_type(&input) else {
        return syn::Error::new_spanned(&enum_name, "DecodeEnum requires #[repr(u8/u16/..)]")
            .to_compile_error()
            .into();
    };

    let output = quote! {
        impl crate::codec::DecodeValue for #enum_name {
            fn decode_from(buffer: &[u8]) -> std::io::Result<(Self, &[u8])> {
                let (value, buffer) = <#repr as crate::codec::DecodeValue>::decode_from(buffer)?;
                match <Self as strum::IntoEnumIterator>::iter().find(|v| v.byte_value() == value) {
                    Some(variant) => Ok((variant, buffer)),
                    None => Err(std::io::Error::new(
                        std::io::ErrorKind::InvalidData,
                        format!("{:#x} is not a supported {}", value, stringify!(#enum_name)),
                    )),
                }
            }
        }
    };

    output.into()
}

/// Implement `crate::codec::DecodeValue` for a struct with named fields.
///
/// Fields are decoded in declaration order and every field type must itself
/// implement `DecodeValue`. A failure names the field it happened in, so a
/// one byte RSA premaster reports `... while decoding VersionPair.minor`.
#[proc_macro_derive(DecodeStruct)]
pub fn derive_decode_struct(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let struct_name = input.ident;

    let Data::Struct(data_struct) = input.data else {
        return syn::Error::new_spanned(&struct_name, "DecodeStruct only supports structs")
            .to_compile_error()
            .into();
    };

    let Fields::Named(fields_named) = data_struct.fields else {
        return syn::Error::new_spanned(&struct_name, "DecodeStruct requires named fields")
            .to_compile_error()
            .into();
    };

    let mut decode_stmts: Vec<proc_macro2::TokenStream> = Vec::new();
    let mut field_names = Vec::new();

    for field in &fields_named.named {
        let Some(ident) = &field.ident else {
            continue;
        };
        let ty = &field.ty;
        let context = format!("{struct_name}.{ident}");
        decode_stmts.push(quote! {
            let (#ident, buffer) = <#ty as crate::codec::DecodeValue>::decode_from(buffer)
                .map_err(|e| std::io::Error::new(e.kind(), format!("{} while decoding {}", e, #context)))?;
        });
        field_names.push(ident.clone());
    }

    let output = quote! {
        impl crate::codec::DecodeValue for #struct_name {
            fn decode_from(buffer: &[u8]) -> std::io::Result<(Self, &[u8])> {
                #(#decode_stmts)*

                Ok((Self { #(#field_names),* }, buffer))
            }
        }
    };

    output.into()
}
