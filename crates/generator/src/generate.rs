// Copyright 2026 UML Ontology Bench Contributors
// SPDX-License-Identifier: Apache-2.0

//! UML-to-OWL generation with per-attempt benchmarking.
//!
//! [`OntologyGenerator`] formats the instructional prompt around the caller's
//! UML XMI text, submits it as a single user turn, and returns the trimmed
//! reply. The benchmarked variant measures the attempt and produces a
//! [`BenchmarkRecord`] whether or not the call succeeded.

use crate::client::{ChatApi, ChatRequest, ChatResponse, OllamaClient};
use crate::error::{GenerateError, Result};
use std::time::Instant;
use tracing::{info, warn};
use uml_ontology_benchmarks::BenchmarkRecord;

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "llama3.1:8b";

const PROMPT_TEMPLATE: &str = r#"You are an expert in converting UML diagrams into OWL ontologies.
Given the following UML diagram in XMI format, generate a corresponding OWL ontology in Turtle format.

Requirements:
1. Use proper OWL/RDFS namespaces (owl:, rdfs:, rdf:)
2. Convert classes with owl:Class
3. Preserve inheritance relationships with rdfs:subClassOf
4. Define properties as owl:DatatypeProperty or owl:ObjectProperty
5. Include cardinality constraints using owl:Restriction
6. Maintain all associations and their multiplicities

UML XMI:
{uml}

Respond ONLY with the OWL ontology in Turtle format, without explanations."#;

/// Result of one benchmarked generation attempt.
///
/// The record is produced for failed attempts too; `ontology` is empty in
/// that case and `record.error` carries the failure description.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    /// The generated Turtle text, empty when the attempt failed.
    pub ontology: String,
    /// Measurements for the attempt.
    pub record: BenchmarkRecord,
}

impl GenerationOutcome {
    /// Whether the attempt produced a reply.
    pub fn is_success(&self) -> bool {
        self.record.success
    }
}

/// UML XMI to OWL/Turtle converter backed by a chat-completion endpoint.
pub struct OntologyGenerator {
    model: String,
    client: Box<dyn ChatApi>,
}

impl OntologyGenerator {
    /// Create a generator for the given model against a local Ollama server.
    pub fn new(model: impl Into<String>) -> Self {
        Self::with_client(model, OllamaClient::new())
    }

    /// Create a generator with an injected chat client.
    pub fn with_client(model: impl Into<String>, client: impl ChatApi + 'static) -> Self {
        Self {
            model: model.into(),
            client: Box::new(client),
        }
    }

    /// Model identifier this generator submits requests for.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate an OWL ontology in Turtle form from UML XMI text.
    ///
    /// The UML text is embedded verbatim in a fixed instructional prompt and
    /// submitted once; there are no retries. Returns the trimmed reply text.
    ///
    /// # Errors
    ///
    /// [`GenerateError::EmptyUml`] for empty or whitespace-only input (no
    /// call is made), [`GenerateError::Api`] for transport or API failures,
    /// and [`GenerateError::MalformedResponse`] when the reply lacks the
    /// message content field.
    pub fn generate(&self, uml: &str) -> Result<String> {
        self.validate(uml)?;
        let request = self.request_for(uml);
        let response = self.client.chat(&request)?;
        let (ontology, _) = extract_reply(response)?;
        Ok(ontology)
    }

    /// Generate with benchmarking: measure the attempt and build a record.
    ///
    /// Upstream failures do not propagate; they yield an outcome holding an
    /// empty ontology and a failed record whose duration still covers the
    /// attempt. Only input validation returns an error, since no attempt is
    /// made at all.
    pub fn generate_benchmarked(&self, uml: &str) -> Result<GenerationOutcome> {
        self.validate(uml)?;
        let request = self.request_for(uml);

        let start = Instant::now();
        let attempt = self
            .client
            .chat(&request)
            .and_then(extract_reply);
        let duration = start.elapsed();

        let outcome = match attempt {
            Ok((ontology, eval_count)) => {
                info!(
                    model = %self.model,
                    output_chars = ontology.chars().count(),
                    seconds = duration.as_secs_f64(),
                    "ontology generated"
                );
                let record = BenchmarkRecord::from_attempt(
                    &self.model,
                    uml,
                    &ontology,
                    duration,
                    eval_count,
                    None,
                );
                GenerationOutcome { ontology, record }
            }
            Err(e) => {
                warn!(model = %self.model, error = %e, "generation attempt failed");
                let record = BenchmarkRecord::from_attempt(
                    &self.model,
                    uml,
                    "",
                    duration,
                    None,
                    Some(e.to_string()),
                );
                GenerationOutcome {
                    ontology: String::new(),
                    record,
                }
            }
        };
        Ok(outcome)
    }

    fn validate(&self, uml: &str) -> Result<()> {
        if uml.trim().is_empty() {
            return Err(GenerateError::EmptyUml);
        }
        Ok(())
    }

    fn request_for(&self, uml: &str) -> ChatRequest {
        ChatRequest::single_turn(&self.model, PROMPT_TEMPLATE.replace("{uml}", uml))
    }
}

fn extract_reply(response: ChatResponse) -> Result<(String, Option<u64>)> {
    let message = response.message.ok_or_else(|| {
        GenerateError::MalformedResponse("reply is missing the message content field".to_string())
    })?;
    Ok((message.content.trim().to_string(), response.eval_count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{ChatMessage, MockChatApi};

    fn reply(content: &str, eval_count: Option<u64>) -> ChatResponse {
        ChatResponse {
            message: Some(ChatMessage {
                role: "assistant".to_string(),
                content: content.to_string(),
            }),
            eval_count,
            ..ChatResponse::default()
        }
    }

    #[test]
    fn empty_input_makes_no_call() {
        let mut client = MockChatApi::new();
        client.expect_chat().times(0);
        let generator = OntologyGenerator::with_client(DEFAULT_MODEL, client);

        assert!(matches!(
            generator.generate(""),
            Err(GenerateError::EmptyUml)
        ));
        assert!(matches!(
            generator.generate("   \n\t"),
            Err(GenerateError::EmptyUml)
        ));
        assert!(matches!(
            generator.generate_benchmarked("  "),
            Err(GenerateError::EmptyUml)
        ));
    }

    #[test]
    fn prompt_embeds_uml_verbatim_in_one_user_turn() {
        let uml = "<uml:Model name=\"Library\"/>";
        let mut client = MockChatApi::new();
        client
            .expect_chat()
            .withf(move |req: &ChatRequest| {
                req.model == DEFAULT_MODEL
                    && !req.stream
                    && req.messages.len() == 1
                    && req.messages[0].role == "user"
                    && req.messages[0].content.contains("<uml:Model name=\"Library\"/>")
            })
            .times(1)
            .returning(|_| Ok(reply("@prefix owl: .", None)));

        let generator = OntologyGenerator::with_client(DEFAULT_MODEL, client);
        assert_eq!(generator.generate(uml).unwrap(), "@prefix owl: .");
    }

    #[test]
    fn reply_text_is_trimmed() {
        let mut client = MockChatApi::new();
        client
            .expect_chat()
            .returning(|_| Ok(reply("  @prefix owl: . \n", None)));
        let generator = OntologyGenerator::with_client("m", client);

        assert_eq!(generator.generate("<model/>").unwrap(), "@prefix owl: .");
    }

    #[test]
    fn missing_message_is_a_malformed_response() {
        let mut client = MockChatApi::new();
        client
            .expect_chat()
            .returning(|_| Ok(ChatResponse::default()));
        let generator = OntologyGenerator::with_client("m", client);

        assert!(matches!(
            generator.generate("<model/>"),
            Err(GenerateError::MalformedResponse(_))
        ));
    }

    #[test]
    fn benchmarked_success_builds_a_success_record() {
        let mut client = MockChatApi::new();
        client
            .expect_chat()
            .returning(|_| Ok(reply("ontology-text", Some(26))));
        let generator = OntologyGenerator::with_client("llama3.1:8b", client);

        let outcome = generator.generate_benchmarked("<model/>").unwrap();
        assert!(outcome.is_success());
        assert_eq!(outcome.ontology, "ontology-text");
        assert_eq!(outcome.record.model, "llama3.1:8b");
        assert_eq!(outcome.record.input_size_chars, 8);
        assert_eq!(outcome.record.output_size_chars, 13);
        assert_eq!(outcome.record.tokens_generated, Some(26));
        assert_eq!(outcome.record.error, None);
    }

    #[test]
    fn benchmarked_failure_yields_a_failed_record() {
        let mut client = MockChatApi::new();
        client
            .expect_chat()
            .returning(|_| Err(GenerateError::api_message("connection refused")));
        let generator = OntologyGenerator::with_client("m", client);

        let outcome = generator.generate_benchmarked("<model/>").unwrap();
        assert!(!outcome.is_success());
        assert!(outcome.ontology.is_empty());
        assert!(!outcome.record.success);
        assert!(outcome.record.error.as_deref().unwrap().contains("connection refused"));
        assert_eq!(outcome.record.tokens_generated, None);
        assert_eq!(outcome.record.tokens_per_second, None);
        assert_eq!(outcome.record.output_size_chars, 0);
    }

    #[test]
    fn benchmarked_malformed_reply_counts_as_failure() {
        let mut client = MockChatApi::new();
        client
            .expect_chat()
            .returning(|_| Ok(ChatResponse::default()));
        let generator = OntologyGenerator::with_client("m", client);

        let outcome = generator.generate_benchmarked("<model/>").unwrap();
        assert!(!outcome.is_success());
        assert!(outcome
            .record
            .error
            .as_deref()
            .unwrap()
            .contains("malformed"));
    }

    #[test]
    fn plain_generate_propagates_api_failures() {
        let mut client = MockChatApi::new();
        client
            .expect_chat()
            .returning(|_| Err(GenerateError::api_message("HTTP 500")));
        let generator = OntologyGenerator::with_client("m", client);

        assert!(matches!(
            generator.generate("<model/>"),
            Err(GenerateError::Api { .. })
        ));
    }
}
