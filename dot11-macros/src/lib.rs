use proc_macro::TokenStream;
use quote::{format_ident, quote, ToTokens};
use syn::{parse_macro_input, Attribute, ItemStruct, Type};

fn int_arg(attr: &Attribute) -> usize {
    attr.parse_args::<syn::LitInt>()
        .unwrap()
        .base10_parse::<usize>()
        .unwrap()
}

fn find_attr<'a>(attrs: &'a [Attribute], name: &str) -> Option<&'a Attribute> {
    attrs.iter().find(|attr| attr.path().is_ident(name))
}

/// Turns a struct describing a fixed wire layout into a zero-copy
/// reader/writer over a byte buffer.
///
/// Fields are laid out in declaration order. Supported field attributes:
/// - `#[bits(n)]`: the field occupies `n` bits of the current octet (LSB
///   first). `bool` fields default to a single bit.
/// - `#[bytes(n)]`: the field occupies `n` octets. `u8`, `u16` and `u32`
///   default to their own width.
/// - `#[into(Type)]`: the getter converts the raw value with `From`, the
///   setter takes `Type` and converts back.
///
/// A field whose type is another `#[frame]` structure yields a nested reader
/// (`name()`) and writer (`name_mut()`). Fields starting with `_` or named
/// `reserved` only advance the offset.
///
/// `#[frame(no_constructor)]` omits the checked `new` constructor.
#[proc_macro_attribute]
pub fn frame(attr: TokenStream, item: TokenStream) -> TokenStream {
    let no_constructor = attr.to_string().contains("no_constructor");
    let input = parse_macro_input!(item as ItemStruct);

    let item_attrs = input.attrs;
    let vis = input.vis;
    let name = input.ident;

    let mut getters = vec![];
    let mut setters = vec![];

    let mut offset = 0usize;
    let mut bits_offset = 0usize;

    for field in input.fields {
        let fnname = field.ident.unwrap();
        let ty = field.ty;
        let ty_str = ty.to_token_stream().to_string();

        let docs: Vec<&Attribute> = field
            .attrs
            .iter()
            .filter(|attr| attr.path().is_ident("doc"))
            .collect();

        let bits = find_attr(&field.attrs, "bits").map(int_arg);
        let bits = if ty_str == "bool" {
            Some(bits.unwrap_or(1))
        } else {
            bits
        };

        let width = find_attr(&field.attrs, "bytes")
            .map(int_arg)
            .unwrap_or(match ty_str.as_str() {
                "u8" => 1,
                "u16" => 2,
                "u32" => 4,
                _ => 0,
            });

        let into = find_attr(&field.attrs, "into")
            .map(|attr| attr.parse_args::<Type>().unwrap());

        let pos = offset;
        let end = offset + width;
        let bit = bits_offset;

        let skip = fnname.to_string().starts_with('_') || fnname.to_string().contains("reserved");

        if !skip {
            let accessors = match (ty_str.as_str(), bits) {
                ("bool", Some(_)) => {
                    let mask: u8 = 1 << bit;
                    Some((
                        quote! { bool },
                        quote! { (self.buffer.as_ref()[#pos] & #mask) != 0 },
                        quote! {
                            let b = &mut self.buffer.as_mut()[#pos];
                            if value {
                                *b |= #mask;
                            } else {
                                *b &= !#mask;
                            }
                        },
                    ))
                }
                ("u8", Some(n)) => {
                    let mask: u8 = (((1u16 << n) - 1) as u8) << bit;
                    Some((
                        quote! { u8 },
                        quote! { (self.buffer.as_ref()[#pos] & #mask) >> #bit },
                        quote! {
                            let b = &mut self.buffer.as_mut()[#pos];
                            *b = (*b & !#mask) | ((value << #bit) & #mask);
                        },
                    ))
                }
                ("u8", None) => Some((
                    quote! { u8 },
                    quote! { self.buffer.as_ref()[#pos] },
                    quote! { self.buffer.as_mut()[#pos] = value; },
                )),
                ("u16", None) => Some((
                    quote! { u16 },
                    quote! {
                        let b = &self.buffer.as_ref()[#pos..#end];
                        u16::from_le_bytes([b[0], b[1]])
                    },
                    quote! { self.buffer.as_mut()[#pos..#end].copy_from_slice(&value.to_le_bytes()); },
                )),
                ("u32", None) => Some((
                    quote! { u32 },
                    quote! {
                        let b = &self.buffer.as_ref()[#pos..#end];
                        u32::from_le_bytes([b[0], b[1], b[2], b[3]])
                    },
                    quote! { self.buffer.as_mut()[#pos..#end].copy_from_slice(&value.to_le_bytes()); },
                )),
                ("& [u8]", None) => Some((
                    quote! { &[u8] },
                    quote! { &self.buffer.as_ref()[#pos..#end] },
                    quote! { self.buffer.as_mut()[#pos..#end].copy_from_slice(value); },
                )),
                (_, None) => None,
                _ => panic!("unsupported bit field type `{ty_str}` for `{fnname}`"),
            };

            match accessors {
                Some((raw_ty, getter, setter)) => {
                    let (ret_ty, getter) = match &into {
                        Some(into) => (quote! { #into }, quote! { <#into>::from({ #getter }) }),
                        None => (raw_ty.clone(), getter),
                    };

                    let (param_ty, convert) = match &into {
                        Some(into) if ty_str == "& [u8]" => (
                            quote! { #into },
                            quote! { let value: &[u8] = value.as_ref(); },
                        ),
                        Some(into) => (
                            quote! { #into },
                            quote! { let value = <#raw_ty>::from(value); },
                        ),
                        None => (raw_ty, quote! {}),
                    };

                    getters.push(quote! {
                        #(#docs)*
                        #[inline]
                        pub fn #fnname(&self) -> #ret_ty {
                            #getter
                        }
                    });

                    let setter_name = format_ident!("set_{}", fnname);
                    let setter_doc = format!("Set the `{fnname}` field.");
                    setters.push(quote! {
                        #[doc = #setter_doc]
                        #[inline]
                        pub fn #setter_name(&mut self, value: #param_ty) {
                            #convert
                            #setter
                        }
                    });
                }
                None => {
                    if width == 0 {
                        panic!("nested field `{fnname}` needs a #[bytes(n)] attribute");
                    }

                    getters.push(quote! {
                        #(#docs)*
                        pub fn #fnname(&self) -> #ty<&'_ [u8]> {
                            #ty::new_unchecked(&self.buffer.as_ref()[#pos..#end])
                        }
                    });

                    let fnname_mut = format_ident!("{}_mut", fnname);
                    let mut_doc = format!("Return a writer for the `{fnname}` field.");
                    setters.push(quote! {
                        #[doc = #mut_doc]
                        pub fn #fnname_mut(&mut self) -> #ty<&'_ mut [u8]> {
                            #ty::new_unchecked(&mut self.buffer.as_mut()[#pos..#end])
                        }
                    });
                }
            }
        }

        match bits {
            Some(n) => {
                bits_offset += n;
                if bits_offset >= 8 {
                    offset += bits_offset / 8;
                    bits_offset %= 8;
                }
            }
            None => offset += width,
        }
    }

    if bits_offset != 0 {
        panic!("`{name}` does not end on an octet boundary");
    }

    let constructor = if no_constructor {
        quote! {}
    } else {
        quote! {
            /// Create a new reader/writer from a given buffer.
            ///
            /// # Errors
            ///
            /// Returns an error if the buffer is too short.
            pub fn new(buffer: T) -> crate::Result<Self> {
                let s = Self::new_unchecked(buffer);

                if !s.check_len() {
                    return Err(crate::Error);
                }

                Ok(s)
            }
        }
    };

    let size = offset;

    let f = quote! {
        #(#item_attrs)*
        #vis struct #name<T: AsRef<[u8]>> {
            buffer: T,
        }

        impl<T: AsRef<[u8]>> #name<T> {
            #constructor

            /// Create a new reader/writer from a given buffer without length
            /// checking.
            pub fn new_unchecked(buffer: T) -> Self {
                Self { buffer }
            }

            /// Returns `false` if the buffer is too short for this structure.
            pub fn check_len(&self) -> bool {
                self.buffer.as_ref().len() >= Self::size()
            }

            /// Returns the size of this structure in bytes.
            pub const fn size() -> usize {
                #size
            }

            /// Return the underlying buffer.
            pub fn into_inner(self) -> T {
                self.buffer
            }

            #(#getters)*
        }

        impl<T: AsRef<[u8]> + AsMut<[u8]>> #name<T> {
            #(#setters)*
        }
    };

    f.into()
}
