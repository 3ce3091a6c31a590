// ABOUTME: Process-wide symbol interning so identical spellings share one allocation

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

thread_local! {
    static TABLE: RefCell<HashMap<Box<str>, Rc<str>>> = RefCell::new(HashMap::new());
}

/// Returns the canonical `Rc<str>` for `name`, allocating one on first sight.
///
/// Every `Value::Symbol` in the interpreter is built through this function, so
/// `Rc::ptr_eq` between two symbols is a correct identity test: two symbols
/// with the same spelling are always the same allocation.
pub fn intern(name: &str) -> Rc<str> {
    TABLE.with(|table| {
        if let Some(existing) = table.borrow().get(name) {
            return Rc::clone(existing);
        }
        let interned: Rc<str> = Rc::from(name);
        table
            .borrow_mut()
            .insert(Box::from(name), Rc::clone(&interned));
        interned
    })
}

/// Identity equality between two interned symbols.
pub fn symbol_eq(a: &Rc<str>, b: &Rc<str>) -> bool {
    Rc::ptr_eq(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_same_spelling_yields_same_allocation() {
        let a = intern("hello");
        let b = intern("hello");
        assert!(Rc::ptr_eq(&a, &b));
    }

    #[test]
    fn interning_different_spellings_yields_different_allocations() {
        let a = intern("foo");
        let b = intern("bar");
        assert!(!Rc::ptr_eq(&a, &b));
    }

    #[test]
    fn symbol_eq_matches_ptr_eq() {
        let a = intern("same");
        let b = intern("same");
        let c = intern("different");
        assert!(symbol_eq(&a, &b));
        assert!(!symbol_eq(&a, &c));
    }
}
