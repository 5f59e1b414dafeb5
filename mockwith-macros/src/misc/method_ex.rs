use syn::{FnArg, GenericParam, TraitItemFn};

pub trait MethodEx {
    fn is_associated_fn(&self) -> bool;
    fn has_type_generics(&self) -> bool;
}

impl MethodEx for TraitItemFn {
    fn is_associated_fn(&self) -> bool {
        !self
            .sig
            .inputs
            .iter()
            .any(|i| matches!(i, FnArg::Receiver(_)))
    }

    fn has_type_generics(&self) -> bool {
        self.sig
            .generics
            .params
            .iter()
            .any(|p| !matches!(p, GenericParam::Lifetime(_)))
    }
}
