use std::path::Path;

use wordswap::{Dictionary, Index};

pub(crate) fn test_dictionary() -> Dictionary {
    [
        ("привет", "lihek"),
        ("мир", "kaar"),
        ("я", "sa"),
        ("ты", "tu"),
        ("мой", "doi"),
        ("друг", "vela"),
    ]
    .iter()
    .fold(Dictionary::new(), |mut dictionary, (source, target)| {
        dictionary.insert(source, target).unwrap();
        dictionary
    })
}

pub(crate) fn test_index() -> Index {
    Index::rebuild(&test_dictionary())
}

pub(crate) fn cli_args<'a>(store: &'a Path, args: &[&'a str]) -> Vec<&'a str> {
    let store = store.to_str().unwrap();
    ["wordswap", "--store", store]
        .into_iter()
        .chain(args.iter().copied())
        .collect()
}
