//! Ordered sets of types, compared by their token text.
//!
//! The macro sees types only as syntax, so two spellings of the same type
//! (`Idle` and `self::Idle`) are different members here.

use quote::ToTokens;
use syn::{Ident, Path};

/// A value with a type identity.
pub trait TypeKey {
    fn key(&self) -> String;
}

impl TypeKey for Path {
    fn key(&self) -> String {
        self.to_token_stream().to_string()
    }
}

impl TypeKey for Ident {
    fn key(&self) -> String {
        self.to_string()
    }
}

/// A `(source, event)` pair, the tag of an ordinary transition.
impl TypeKey for (Path, Path) {
    fn key(&self) -> String {
        format!("{} @ {}", self.0.key(), self.1.key())
    }
}

/// Whether `a` and `b` denote the same type.
pub fn same<T: TypeKey>(a: &T, b: &T) -> bool {
    a.key() == b.key()
}

/// Removes repeated members, keeping first occurrences in order.
pub fn unique<T: TypeKey + Clone>(list: &[T]) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(list.len());
    for item in list {
        if !contains(&out, item) {
            out.push(item.clone());
        }
    }
    out
}

/// The member at `index`.
pub fn get<T>(list: &[T], index: usize) -> Option<&T> {
    list.get(index)
}

pub fn contains<T: TypeKey>(list: &[T], item: &T) -> bool {
    list.iter().any(|member| same(member, item))
}

/// Position of the first occurrence of `item`.
pub fn position<T: TypeKey>(list: &[T], item: &T) -> Option<usize> {
    list.iter().position(|member| same(member, item))
}

/// Position of the first occurrence of `item`, or `list.len()` when absent.
pub fn index_of<T: TypeKey>(list: &[T], item: &T) -> usize {
    position(list, item).unwrap_or(list.len())
}

pub fn count_of<T: TypeKey>(list: &[T], item: &T) -> usize {
    list.iter().filter(|member| same(*member, item)).count()
}

/// Every occurrence after the first of a repeated member.
pub fn duplicates<T: TypeKey>(list: &[T]) -> Vec<&T> {
    list.iter()
        .enumerate()
        .filter(|(i, item)| index_of(list, *item) < *i)
        .map(|(_, item)| item)
        .collect()
}

/// Drops the absent entries of an optional list.
pub fn non_void<T: Clone>(list: &[Option<T>]) -> Vec<T> {
    list.iter().flatten().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn paths(list: &[&str]) -> Vec<Path> {
        list.iter()
            .map(|s| syn::parse_str(s).unwrap())
            .collect()
    }

    #[test]
    fn unique_keeps_first_occurrences() {
        let list = paths(&["A", "B", "A", "C", "B"]);
        let keys: Vec<String> = unique(&list).iter().map(TypeKey::key).collect();
        assert_eq!(keys, ["A", "B", "C"]);
    }

    #[test]
    fn index_of_uses_length_as_not_found() {
        let list = paths(&["A", "B"]);
        assert_eq!(index_of(&list, &parse_quote!(B)), 1);
        assert_eq!(index_of(&list, &parse_quote!(Z)), 2);
        assert!(get(&list, index_of(&list, &parse_quote!(Z))).is_none());
    }

    #[test]
    fn position_is_absent_for_missing_members() {
        let list = paths(&["A", "B", "B"]);
        assert_eq!(position(&list, &parse_quote!(B)), Some(1));
        assert_eq!(position(&list, &parse_quote!(C)), None);
    }

    #[test]
    fn counts_and_duplicates() {
        let list = paths(&["A", "B", "A", "A"]);
        assert_eq!(count_of(&list, &parse_quote!(A)), 3);
        assert_eq!(count_of(&list, &parse_quote!(C)), 0);
        assert_eq!(duplicates(&list).len(), 2);
        assert!(duplicates(&paths(&["A", "B"])).is_empty());
    }

    #[test]
    fn qualified_paths_are_distinct() {
        let list = paths(&["Idle", "self::Idle"]);
        assert_eq!(unique(&list).len(), 2);
    }

    #[test]
    fn pairs_compare_both_halves() {
        let a: Path = parse_quote!(A);
        let b: Path = parse_quote!(B);
        let go: Path = parse_quote!(Go);
        let tags = vec![(a.clone(), go.clone()), (b, go.clone()), (a, go)];
        assert_eq!(duplicates(&tags).len(), 1);
    }

    #[test]
    fn non_void_filters_absent_entries() {
        assert_eq!(non_void(&[Some(1), None, Some(3)]), [1, 3]);
        assert!(non_void::<u8>(&[None, None]).is_empty());
    }
}
