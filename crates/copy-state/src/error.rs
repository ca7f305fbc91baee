use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// `use_copy_state` ran under an owner with no `provide_copy_state` ancestor.
    #[error("copy state was not provided; call provide_copy_state() at the app root")]
    NotProvided,
}
