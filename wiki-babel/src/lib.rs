//! Bidirectional conversion between wiki markup and an HTML-like intermediate form
//!
//!     This crate converts MediaWiki-style markup (emphasis ticks, `[[links]]`, `{{templates}}`,
//!     `{| tables |}`, `== headings ==`, list lines) into a tag-based intermediate text, and
//!     back again. The intermediate form is a string as well: downstream tools treat it as
//!     HTML, and every construct has a single, documented spelling in it.
//!
//!     This is a pure lib, that is, it powers the wiki cli but is shell agnostic. No code here
//!     should suppose a shell environment, be it std print, env vars etc. Diagnostics go through
//!     `tracing` and it is up to the binary to install a subscriber.
//!
//! Architecture
//!
//!     Conversion is an ordered list of stages, each a pure `&str -> String` pass over the whole
//!     document (see ./pipeline.rs). Stages recognize a construct, build the IR node for it
//!     (./ir/nodes.rs) and hand it to the target notation's serializer. The recognizers live in
//!     ./common and are shared by both formats; each format only knows how to spell nodes.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── pipeline.rs             # Stage order for both directions
//!     ├── formats
//!     │   ├── <format>
//!     │   │   ├── serializer.rs   # IR node -> notation
//!     │   │   └── mod.rs
//!     ├── lib.rs
//!     ├── ir                      # Intermediate Representation
//!     ├── common                  # Recognizers shared by both directions
//!
//! Testing
//!     tests
//!     ├── wiki                    # Conversion tables, both directions
//!     └── common                  # Property tests over the core algorithms
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include
//!     these in the mod.
//!
//! Core Algorithms
//!
//!     Templates nest, and regexes can't pair nested braces. The template stage first marks
//!     every delimiter with its nesting depth (./common/nesting.rs), then runs a stack parser
//!     over those markers (./common/templates.rs). Calls deeper than the configured limit stay
//!     literal.
//!
//!     Markup that must not be interpreted (`<nowiki>`, `<ref>`) is base64-encoded into an
//!     attribute before anything else runs and decoded after everything else ran
//!     (./common/opaque.rs).
//!
//!     Finally, tick runs that never closed leave dangling opening tags; the balancer
//!     (./common/balance.rs) closes them and drops stray closers.
//!
//! Formats
//!
//!     Format specific capabilities are implemented with the Format trait, see ./format.rs.
//!     - Format trait: Uniform interface for all formats (parsing and/or serialization)
//!     - FormatRegistry: Centralized discovery and selection of formats
//!     - WikiFormat / HtmlFormat: the two notations, pivoting through the intermediate text
//!
//!     Conversion is lossy in places (implicit table rows, unclosed emphasis, template argument
//!     whitespace), so round tripping is exact only for the canonical spellings.

pub mod common;
pub mod error;
pub mod format;
pub mod formats;
pub mod ir;
pub mod pipeline;
pub mod registry;

pub use error::FormatError;
pub use format::Format;
pub use ir::Document;
pub use pipeline::{intermediate_to_markup, markup_to_intermediate, TranscodeOptions, Transcoder};
pub use registry::FormatRegistry;
