//! Result records produced by the test-case executor.

use anyhow::{anyhow, bail, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `exec_err` sentinel for a case that ran but returned the wrong answer.
pub const INCORRECT_ANSWER: &str = "incorrect answer";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecResult {
    /// 1 on success, anything else otherwise.
    pub exec_res: i64,
    pub exec_err: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
    /// Message as reported; `None` when the executor sent a null `exec_err`.
    Error(Option<String>),
}

impl ExecResult {
    pub fn success() -> Self {
        Self { exec_res: 1, exec_err: None }
    }

    pub fn incorrect() -> Self {
        Self { exec_res: 0, exec_err: Some(INCORRECT_ANSWER.to_string()) }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { exec_res: 0, exec_err: Some(message.into()) }
    }

    /// Build a record from a loosely-typed JSON object.
    ///
    /// Both `exec_res` and `exec_err` must be present. `exec_err` may be null,
    /// but a missing key is rejected rather than read as null.
    pub fn from_value(value: &Value) -> Result<Self> {
        let obj = value
            .as_object()
            .ok_or_else(|| anyhow!("result record must be a JSON object, got: {}", value))?;
        let exec_res = match obj.get("exec_res") {
            Some(v) => exec_res_from(v)?,
            None => bail!("result record is missing field `exec_res`"),
        };
        let exec_err = match obj.get("exec_err") {
            Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(v) => bail!("exec_err must be a string or null, got: {}", v),
            None => bail!("result record is missing field `exec_err`"),
        };
        Ok(Self { exec_res, exec_err })
    }

    /// Classify the record. Success wins over whatever `exec_err` carries; a
    /// null `exec_err` on a failure stays null.
    pub fn outcome(&self) -> Outcome {
        if self.exec_res == 1 {
            return Outcome::Correct;
        }
        match self.exec_err.as_deref() {
            Some(INCORRECT_ANSWER) => Outcome::Incorrect,
            other => Outcome::Error(other.map(str::to_string)),
        }
    }
}

// Executors emit 0/1, booleans or whole floats; all compare against 1.
fn exec_res_from(v: &Value) -> Result<i64> {
    match v {
        Value::Bool(b) => Ok(i64::from(*b)),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(i);
            }
            match n.as_f64() {
                Some(f) if f.fract() == 0.0 && f.abs() <= i64::MAX as f64 => Ok(f as i64),
                _ => bail!("exec_res must be a whole number, got: {}", n),
            }
        }
        other => bail!("exec_res must be a number or boolean, got: {}", other),
    }
}
