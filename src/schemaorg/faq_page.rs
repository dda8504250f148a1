//! <https://schema.org/FAQPage>

use super::{SchemaValidator, defaults};
use crate::render::ToJsonLd;
use educe::Educe;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Educe, Serialize, Deserialize)]
#[educe(Default)]
pub struct Answer {
    #[serde(rename = "@type")]
    #[educe(Default = defaults::answer())]
    pub kind: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
}

impl Answer {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    fn ensure_defaults(&mut self) {
        if self.kind.is_empty() {
            self.kind = defaults::answer();
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(rename = "@type")]
    #[educe(Default = defaults::question())]
    pub kind: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepted_answer: Option<Answer>,
}

impl Question {
    pub fn new(name: impl Into<String>, answer: Option<Answer>) -> Self {
        Self {
            name: name.into(),
            accepted_answer: answer,
            ..Default::default()
        }
    }

    fn ensure_defaults(&mut self) {
        if self.kind.is_empty() {
            self.kind = defaults::question();
        }
        if let Some(answer) = &mut self.accepted_answer {
            answer.ensure_defaults();
        }
    }
}

/// A page of questions, each with one accepted answer.
#[derive(Debug, Clone, PartialEq, Eq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(rename_all = "camelCase")]
pub struct FaqPage {
    #[serde(rename = "@context")]
    #[educe(Default = defaults::context())]
    pub context: String,

    #[serde(rename = "@type")]
    #[educe(Default = defaults::faq_page())]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub main_entity: Vec<Question>,
}

impl FaqPage {
    pub fn new(questions: Vec<Question>) -> Self {
        let mut page = Self {
            main_entity: questions,
            ..Default::default()
        };
        page.ensure_defaults();
        page
    }

    fn ensure_defaults(&mut self) {
        if self.context.is_empty() {
            self.context = defaults::context();
        }
        if self.kind.is_empty() {
            self.kind = defaults::faq_page();
        }
        for question in &mut self.main_entity {
            question.ensure_defaults();
        }
    }
}

impl SchemaValidator for FaqPage {
    fn validate(&self) -> Vec<String> {
        if self.main_entity.is_empty() {
            return vec!["FAQPage should contain at least one question".to_owned()];
        }

        let mut warnings = Vec::new();
        for (question, n) in self.main_entity.iter().zip(1..) {
            if question.name.is_empty() {
                warnings.push(format!("Question {n} is missing a name"));
            }
            match &question.accepted_answer {
                None => warnings.push(format!("Question {n} is missing an accepted answer")),
                Some(answer) if answer.text.is_empty() => {
                    warnings.push(format!("Answer for question {n} is missing text"));
                }
                Some(_) => {}
            }
        }
        warnings
    }
}

impl ToJsonLd for FaqPage {
    fn id_prefix(&self) -> &'static str {
        "faqpage"
    }
}
