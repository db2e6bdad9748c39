use crate::schema::Modules;

/// Module names in ascending byte order.
///
/// Output reproducibility rests on this: the schema map has no stable
/// iteration order, so every caller that emits modules goes through here.
pub fn sorted_module_names<'a>(modules: &Modules<'a>) -> Vec<&'a str> {
    let mut names: Vec<&'a str> = modules.keys().copied().collect();
    // Names are unique map keys, so an unstable sort is enough.
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::NativeModule;

    #[test]
    fn sorts_bytewise_not_case_insensitively() {
        let m = NativeModule::default();
        let modules = Modules::from([("foo", &m), ("Foo", &m), ("Bar", &m), ("_x", &m)]);

        assert_eq!(sorted_module_names(&modules), vec!["Bar", "Foo", "_x", "foo"]);
    }

    #[test]
    fn empty_in_empty_out() {
        assert!(sorted_module_names(&Modules::new()).is_empty());
    }
}
