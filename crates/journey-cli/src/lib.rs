//! journey-cli
//! ===========
//!
//! Command-line interface for the `journey-core` country and macro-region
//! dataset.
//!
//! This crate primarily provides a binary (`journey-cli`). The library target
//! only exists so the crate has a rendered documentation page.
//!
//! Basic usage:
//!
//! ```text
//! journey-cli --help
//! journey-cli stats
//! journey-cli countries --search ita
//! journey-cli --data-dir ./public macroareas --search europe
//! journey-cli build --csv data/countries.csv --out public/api-data
//! ```
//!
//! For programmatic access use the [`journey-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
