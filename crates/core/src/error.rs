use thiserror::Error;

/// Errors raised while constructing a component.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ComponentError {
    #[error("Toggle group requires at least one button")]
    EmptyToggleGroup,
    #[error("Toggle group has {buttons} buttons but {values} values")]
    ValuesLengthMismatch { buttons: usize, values: usize },
}

/// Errors raised by the component default registry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),
}
