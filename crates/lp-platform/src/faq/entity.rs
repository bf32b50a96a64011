//! FAQ Entity

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    #[serde(rename = "_id")]
    pub id: String,

    pub product: String,

    pub question: String,

    pub answer: String,
}

impl Faq {
    pub fn new(
        product: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            id: crate::TsidGenerator::generate(),
            product: product.into(),
            question: question.into(),
            answer: answer.into(),
        }
    }
}
