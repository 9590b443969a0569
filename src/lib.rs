pub mod config;
pub mod error;
pub mod io;
pub mod logging;
pub mod promptable;
pub mod prompts;
pub mod registry;
pub mod types;
pub mod utils;

pub use config::{LoggingConfig, PromptConfig, Settings};
pub use error::{PromptError, PromptResult};
pub use io::Session;
pub use promptable::{PropertyDecl, PropertyDescriptor, Promptable, Schema};
pub use prompts::{
    AnswerParser, BoxedPrompt, LinePrompt, ListPrompt, Prompt, PromptExt, StructuralPrompt,
};
pub use registry::Registry;
pub use types::{Object, PrimitiveKind, PromptValue, StructuralType, TypeDescriptor, Value};
