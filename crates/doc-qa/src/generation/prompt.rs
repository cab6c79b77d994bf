//! Prompt templates for document-grounded answers

/// Prompt builder for document questions
pub struct PromptBuilder;

impl PromptBuilder {
    /// Build the full prompt: the whole document verbatim, then the question.
    ///
    /// No truncation is applied; oversized documents are bounded only by the
    /// remote model's own context limit.
    pub fn build_document_prompt(document_text: &str, question: &str) -> String {
        format!(
            r#"You are a helpful assistant answering questions based on the provided document content.

Document Content:
{document}

Question: {question}

Please provide a clear and accurate answer based solely on the information in the document.
If the answer cannot be found in the document, please state that clearly."#,
            document = document_text,
            question = question
        )
    }
}
