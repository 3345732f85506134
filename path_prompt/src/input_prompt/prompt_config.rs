// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Debug, Formatter},
          future::Future,
          pin::Pin,
          sync::Arc};

use crate::{CompletionOrder, Validation};

/// The future returned by a [`Validator`].
pub type ValidationFuture = Pin<Box<dyn Future<Output = Validation> + Send + 'static>>;

/// Checks a submitted answer. It may be async, the prompt shows a spinner while it runs.
pub type Validator = Arc<dyn Fn(String) -> ValidationFuture + Send + Sync>;

/// Reformats the displayed value. It never changes what is stored or returned.
pub type Transformer = Arc<dyn Fn(&str, TransformContext) -> String + Send + Sync>;

/// Passed to a [`Transformer`] on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransformContext {
    /// Set on the last render, once the answer has been accepted.
    pub is_final: bool,
}

/// Everything a prompt session needs to know up front. This is read only for the
/// whole session.
#[derive(Clone)]
pub struct PromptConfig {
    pub message: String,
    pub default_value: Option<String>,
    /// Only offer folders when completing paths.
    pub directory_only: bool,
    pub validator: Option<Validator>,
    pub transformer: Option<Transformer>,
    pub completion_order: CompletionOrder,
}

impl Debug for PromptConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PromptConfig")
            .field("message", &self.message)
            .field("default_value", &self.default_value)
            .field("directory_only", &self.directory_only)
            .field("validator", &self.validator.is_some())
            .field("transformer", &self.transformer.is_some())
            .field("completion_order", &self.completion_order)
            .finish()
    }
}

impl PromptConfig {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            default_value: None,
            directory_only: false,
            validator: None,
            transformer: None,
            completion_order: CompletionOrder::default(),
        }
    }

    /// An empty default is the same as no default.
    #[must_use]
    pub fn with_default(mut self, default_value: impl Into<String>) -> Self {
        let default_value = default_value.into();
        self.default_value = (!default_value.is_empty()).then_some(default_value);
        self
    }

    #[must_use]
    pub fn with_directory_only(mut self, directory_only: bool) -> Self {
        self.directory_only = directory_only;
        self
    }

    #[must_use]
    pub fn with_completion_order(mut self, completion_order: CompletionOrder) -> Self {
        self.completion_order = completion_order;
        self
    }

    /// The validator can return anything that converts into a [`Validation`], eg:
    /// `bool`, `String`, or `&'static str`.
    #[must_use]
    pub fn with_validator<F, Fut, V>(mut self, validator: F) -> Self
    where
        F: Fn(String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = V> + Send + 'static,
        V: Into<Validation>,
    {
        self.validator = Some(Arc::new(move |value: String| -> ValidationFuture {
            let fut = validator(value);
            Box::pin(async move { fut.await.into() })
        }));
        self
    }

    #[must_use]
    pub fn with_transformer<F>(mut self, transformer: F) -> Self
    where
        F: Fn(&str, TransformContext) -> String + Send + Sync + 'static,
    {
        self.transformer = Some(Arc::new(transformer));
        self
    }

    /// Run the validator on `value`. Without a validator every answer is accepted.
    #[must_use]
    pub fn validate(&self, value: String) -> ValidationFuture {
        match &self.validator {
            Some(validator) => validator(value),
            None => Box::pin(std::future::ready(Validation::Valid)),
        }
    }

    /// Run the transformer on `value`. Without a transformer the value is shown as is.
    #[must_use]
    pub fn transform(&self, value: &str, context: TransformContext) -> String {
        match &self.transformer {
            Some(transformer) => transformer(value, context),
            None => value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn test_no_validator_accepts_everything() {
        let config = PromptConfig::new("msg");
        assert_eq!(config.validate(String::new()).await, Validation::Valid);
    }

    #[tokio::test]
    async fn test_validator_output_is_converted() {
        let config = PromptConfig::new("msg").with_validator(|value: String| async move {
            if value.len() > 3 { Validation::Valid } else { "too short".into() }
        });
        assert_eq!(
            config.validate("ab".into()).await,
            Validation::InvalidWithMessage("too short".into())
        );
        assert_eq!(config.validate("abcd".into()).await, Validation::Valid);

        let config = PromptConfig::new("msg").with_validator(|_| async { false });
        assert_eq!(config.validate("x".into()).await, Validation::Invalid);
    }

    #[test]
    fn test_transformer() {
        let config = PromptConfig::new("msg").with_transformer(|value, ctx| {
            if ctx.is_final {
                format!("[{value}]")
            } else {
                value.to_uppercase()
            }
        });
        assert_eq!(config.transform("ab", TransformContext { is_final: false }), "AB");
        assert_eq!(config.transform("ab", TransformContext { is_final: true }), "[ab]");
        assert_eq!(
            PromptConfig::new("msg").transform("ab", TransformContext::default()),
            "ab"
        );
    }

    #[test]
    fn test_empty_default_is_no_default() {
        assert_eq!(PromptConfig::new("msg").with_default("").default_value, None);
        assert_eq!(
            PromptConfig::new("msg").with_default("./out").default_value,
            Some("./out".to_string())
        );
    }
}
