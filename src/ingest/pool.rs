//! Thread-local parser pool for reusing tree-sitter Parser instances.
//!
//! Both analysis passes parse every candidate file, possibly on rayon worker
//! threads. Each thread keeps one Go parser, created lazily on first use, so
//! no parser is shared and no lock is taken.
//!
//! # Usage
//!
//! ```rust
//! use layermap::ingest::{extract_go_file, pool::with_go_parser};
//!
//! let file = with_go_parser(|parser| extract_go_file(parser, b"package main\n")).unwrap();
//! assert_eq!(file.unwrap().package, "main");
//! ```

use std::cell::RefCell;

use super::new_go_parser;

thread_local! {
    static GO_PARSER: RefCell<Option<tree_sitter::Parser>> = const { RefCell::new(None) };
}

/// Run `f` with this thread's Go parser, creating it on first use
pub fn with_go_parser<F, R>(f: F) -> Result<R, tree_sitter::LanguageError>
where
    F: FnOnce(&mut tree_sitter::Parser) -> R,
{
    GO_PARSER.with(|parser_cell| {
        let mut slot = parser_cell.borrow_mut();
        let parser = match slot.take() {
            Some(parser) => parser,
            None => new_go_parser()?,
        };
        let parser = slot.insert(parser);
        Ok(f(parser))
    })
}
