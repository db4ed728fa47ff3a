use std::fmt;

use serde::Deserialize;
use thiserror::Error;

pub const ERROR_TEXT: &str = "Error in prediction!";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PredictError {
    #[error("Failed to get response from server. (status {0})")]
    Status(u16),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("canvas produced no image")]
    Encode,
}

/// The label returned by the classifier, kept as display text.
///
/// Accepts any JSON number or a string holding a finite number. Strings are shown as
/// received; whole-number floats drop their fraction (`7.0` shows as `7`).
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(try_from = "RawDigit")]
pub struct Digit(String);

impl Digit {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDigit {
    Number(serde_json::Number),
    Text(String),
}

fn number_text(number: &serde_json::Number) -> String {
    if number.is_i64() || number.is_u64() {
        return number.to_string();
    }
    match number.as_f64() {
        Some(value) if value == 0.0 => "0".to_string(),
        Some(value) if value.fract() == 0.0 => format!("{value:.0}"),
        Some(value) => value.to_string(),
        None => number.to_string(),
    }
}

impl TryFrom<RawDigit> for Digit {
    type Error = String;

    fn try_from(raw: RawDigit) -> Result<Self, Self::Error> {
        match raw {
            RawDigit::Number(number) => Ok(Digit(number_text(&number))),
            RawDigit::Text(text) => match text.trim().parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(Digit(text)),
                _ => Err(format!("predicted_digit is not numeric: {text:?}")),
            },
        }
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PredictResponse {
    pub predicted_digit: Digit,
}

pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Maps an HTTP status and body to a prediction.
pub fn interpret_response(status: u16, body: &str) -> Result<Digit, PredictError> {
    if !is_success(status) {
        return Err(PredictError::Status(status));
    }
    serde_json::from_str::<PredictResponse>(body)
        .map(|response| response.predicted_digit)
        .map_err(|err| PredictError::Decode(err.to_string()))
}

/// Text shown in the result element. Every failure kind reads the same.
pub fn result_text(outcome: &Result<Digit, PredictError>) -> String {
    match outcome {
        Ok(digit) => format!("Predicted Number: {digit}"),
        Err(_) => ERROR_TEXT.to_string(),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

/// Hands out increasing tickets; only the newest one may write its result.
#[derive(Debug, Default)]
pub struct TicketCounter {
    latest: u64,
}

impl TicketCounter {
    pub fn issue(&mut self) -> RequestTicket {
        self.latest += 1;
        RequestTicket(self.latest)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }
}
