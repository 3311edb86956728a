use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::parse::Parser;

/// Turn a struct with exactly 3 named fields into a color model.
///
/// The fields are made public, `Clone` and `Debug` are derived (and the serde
/// traits when the `serde` feature of the host crate is on), every type
/// parameter gets a `PhantomData` field, and the following are generated:
/// `new`, `to_components`, `From<Components>` and an implementation of
/// `crate::models::Model`.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.len() != 3 {
        return quote! {
            compile_error!("Models must have exactly 3 fields, one for each component of the color.")
        }
        .into();
    }

    let field_names = match input
        .fields
        .iter()
        .map(|f| f.ident.clone())
        .collect::<Option<Vec<_>>>()
    {
        Some(names) => names,
        None => {
            return syn::Error::new_spanned(&input.ident, "model fields must be named")
                .to_compile_error()
                .into()
        }
    };

    let field1 = &field_names[0];
    let field2 = &field_names[1];
    let field3 = &field_names[2];

    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let derives = syn::Attribute::parse_outer.parse2(quote! {
        #[derive(Clone, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    });
    match derives {
        Ok(attrs) => input.attrs.extend(attrs),
        Err(err) => return err.to_compile_error().into(),
    }

    let mut type_params = vec![];
    for param in input.generics.params.iter() {
        match param {
            syn::GenericParam::Type(type_param) => type_params.push(type_param.ident.clone()),
            other => {
                return syn::Error::new_spanned(other, "only type parameters are supported")
                    .to_compile_error()
                    .into()
            }
        }
    }

    let mut phantom_fields: Vec<syn::Ident> = vec![];

    if let syn::Fields::Named(ref mut named) = input.fields {
        for ident in type_params.iter() {
            let field_name = format!("_{}", ident.to_string().to_lowercase());
            let field_name = syn::Ident::new(field_name.as_str(), Span::call_site());
            phantom_fields.push(field_name.clone());

            let field = syn::Field::parse_named.parse2(quote! {
                #[cfg_attr(feature = "serde", serde(skip))]
                #field_name: std::marker::PhantomData<#ident>
            });
            match field {
                Ok(field) => named.named.push(field),
                Err(err) => return err.to_compile_error().into(),
            }
        }
    }

    let struct_name = input.ident.clone();
    let (impl_gen, type_gen, _) = input.generics.split_for_impl();

    let new_impl = quote! {
        impl #impl_gen #struct_name #type_gen {
            /// Create a new color in this model.
            pub fn new(
                #field1: crate::color::Component,
                #field2: crate::color::Component,
                #field3: crate::color::Component,
            ) -> Self {
                Self {
                    #field1,
                    #field2,
                    #field3,
                    #(#phantom_fields: std::marker::PhantomData,)*
                }
            }

            /// Convert this model into generic components.
            pub fn to_components(&self) -> crate::color::Components {
                crate::color::Components(self.#field1, self.#field2, self.#field3)
            }
        }

        impl #impl_gen From<crate::color::Components> for #struct_name #type_gen {
            fn from(value: crate::color::Components) -> Self {
                Self::new(value.0, value.1, value.2)
            }
        }

        impl #impl_gen crate::models::Model for #struct_name #type_gen
        where
            Self: crate::color::HasSpace,
        {
            fn to_color(&self) -> crate::color::Color {
                crate::color::Color {
                    components: self.to_components(),
                    flags: <Self as crate::color::HasSpace>::powerless(self),
                    space: <Self as crate::color::HasSpace>::SPACE,
                }
            }

            fn from_color(color: &crate::color::Color) -> Self {
                Self::from(color.components)
            }
        }
    };

    quote! {
        #input
        #new_impl
    }
    .into()
}
