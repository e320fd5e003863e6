use quote::quote;
use syn::{parse_macro_input, DeriveInput, Ident, Index, LitStr};

#[proc_macro_derive(RegressionModel, attributes(parameters, equation))]
pub fn derive_regression_model(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive_regression_model_impl(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn str_attr(attr: &syn::Attribute) -> syn::Result<LitStr> {
    if let syn::Meta::NameValue(meta) = &attr.meta {
        if let syn::Expr::Lit(val) = &meta.value {
            if let syn::Lit::Str(s) = &val.lit {
                return Ok(s.clone());
            }
        }
    }
    Err(syn::Error::new_spanned(
        attr,
        "expected string value, e.g. #[parameters = \"V, K\"]",
    ))
}

fn derive_regression_model_impl(input: DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = input.ident;

    let mut parameters: Option<LitStr> = None;
    let mut equation: Option<LitStr> = None;

    for attr in &input.attrs {
        if attr.path().is_ident("parameters") {
            parameters = Some(str_attr(attr)?);
        } else if attr.path().is_ident("equation") {
            equation = Some(str_attr(attr)?);
        }
    }

    let parameters = parameters.ok_or_else(|| {
        syn::Error::new_spanned(
            name.clone(),
            "Missing #[parameters = \"<p1>, <p2>, ...\"] attribute listing the parameter names in vector order",
        )
    })?;
    let equation = equation.ok_or_else(|| {
        syn::Error::new_spanned(
            name.clone(),
            "Missing #[equation = \"<template>\"] attribute, e.g. \"y = {V:.6}x/({K:.6}+x)\"",
        )
    })?;

    let names: Vec<String> = parameters
        .value()
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if names.is_empty() {
        return Err(syn::Error::new_spanned(
            parameters,
            "parameter list must name at least one parameter",
        ));
    }
    let idents = names
        .iter()
        .map(|n| {
            syn::parse_str::<Ident>(n).map_err(|_| {
                syn::Error::new_spanned(
                    &parameters,
                    format!("parameter name `{n}` is not a valid identifier"),
                )
            })
        })
        .collect::<syn::Result<Vec<Ident>>>()?;

    let n = names.len();
    let indices = (0..n).map(Index::from);

    let expanded = quote! {
        impl RegressionModel for #name {
            fn parameter_names(&self) -> &'static [&'static str] {
                &[#(#names),*]
            }

            fn val(&self, x: f64, params: &[f64]) -> f64 {
                self.f(x, &nalgebra::SVector::<f64, #n>::from_row_slice(&params[..#n]))
            }

            fn val_grad(&self, x: f64, params: &[f64]) -> (f64, nalgebra::DVector<f64>) {
                let p = nalgebra::SVector::<f64, #n>::from_row_slice(&params[..#n]);
                let (val, grad) = num_dual::gradient(|v| self.f(x.into(), &v), p);
                (val, nalgebra::DVector::from_column_slice(grad.as_slice()))
            }

            fn equation(&self, params: &[f64]) -> String {
                format!(#equation, #(#idents = regmodel::FixedFloat(params[#indices])),*)
            }
        }
    };
    Ok(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn err_msg(input: DeriveInput) -> String {
        match derive_regression_model_impl(input) {
            Ok(_) => panic!("derive succeeded"),
            Err(e) => e.to_string(),
        }
    }

    #[test]
    fn expands_model() -> syn::Result<()> {
        let input: DeriveInput = parse_quote! {
            #[parameters = "V, K"]
            #[equation = "y = {V:.6}x/({K:.6}+x)"]
            struct MichaelisMenten;
        };
        let expanded: String = derive_regression_model_impl(input)?
            .to_string()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        assert!(expanded.contains("implRegressionModelforMichaelisMenten"));
        assert!(expanded.contains(r#"&["V","K"]"#));
        assert!(expanded.contains("num_dual::gradient"));
        assert!(expanded.contains("V=regmodel::FixedFloat(params[0])"));
        assert!(expanded.contains("K=regmodel::FixedFloat(params[1])"));
        Ok(())
    }

    #[test]
    fn missing_parameters() {
        let input: DeriveInput = parse_quote! {
            #[equation = "y = {V:.6}x"]
            struct Model;
        };
        assert!(err_msg(input).starts_with("Missing #[parameters"));
    }

    #[test]
    fn missing_equation() {
        let input: DeriveInput = parse_quote! {
            #[parameters = "V"]
            struct Model;
        };
        assert!(err_msg(input).starts_with("Missing #[equation"));
    }

    #[test]
    fn non_string_attribute() {
        let input: DeriveInput = parse_quote! {
            #[parameters = 2]
            #[equation = "y = {V:.6}x"]
            struct Model;
        };
        assert!(err_msg(input).starts_with("expected string value"));
        let input: DeriveInput = parse_quote! {
            #[parameters = "V"]
            #[equation(y)]
            struct Model;
        };
        assert!(err_msg(input).starts_with("expected string value"));
    }

    #[test]
    fn empty_parameter_list() {
        let input: DeriveInput = parse_quote! {
            #[parameters = " , "]
            #[equation = "y = x"]
            struct Model;
        };
        assert_eq!(
            err_msg(input),
            "parameter list must name at least one parameter"
        );
    }

    #[test]
    fn invalid_parameter_name() {
        let input: DeriveInput = parse_quote! {
            #[parameters = "V, 1K"]
            #[equation = "y = {V:.6}x"]
            struct Model;
        };
        assert_eq!(
            err_msg(input),
            "parameter name `1K` is not a valid identifier"
        );
    }
}
