//! Test doubles for the ports.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use restq_domain::{AssertOperator, AssertionError, Operand, ScenarioDescriptor};

use crate::context::ScenarioContext;
use crate::ports::{Assert, Clock, Dataset, DatasetError, LocatorError, ResponseLocator};

/// One call made to an assertion primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct AssertCall {
    pub operator: AssertOperator,
    pub actual: Operand,
    pub expected: Operand,
    pub message: String,
}

impl AssertCall {
    /// Condition passed to `ok`.
    pub fn condition(&self) -> bool {
        self.actual == Operand::from(true)
    }
}

/// Assertion primitives that record every call and never fail.
#[derive(Debug, Default)]
pub struct RecordingAssert {
    calls: Mutex<Vec<AssertCall>>,
}

impl RecordingAssert {
    pub fn calls(&self) -> Vec<AssertCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(
        &self,
        operator: AssertOperator,
        actual: Operand,
        expected: Operand,
        message: String,
    ) -> Result<(), AssertionError> {
        self.calls.lock().unwrap().push(AssertCall {
            operator,
            actual,
            expected,
            message,
        });
        Ok(())
    }
}

impl Assert for RecordingAssert {
    fn strict_equal(
        &self,
        actual: Operand,
        expected: Operand,
        message: String,
    ) -> Result<(), AssertionError> {
        self.record(AssertOperator::StrictEqual, actual, expected, message)
    }

    fn not_strict_equal(
        &self,
        actual: Operand,
        expected: Operand,
        message: String,
    ) -> Result<(), AssertionError> {
        self.record(AssertOperator::NotStrictEqual, actual, expected, message)
    }

    fn ok(&self, condition: bool, message: String) -> Result<(), AssertionError> {
        self.record(
            AssertOperator::Ok,
            Operand::from(condition),
            Operand::from(true),
            message,
        )
    }
}

/// Calls received by a [`StubDataset`].
#[derive(Debug, Clone, Default)]
pub struct DatasetLog {
    pub gets: Vec<String>,
    pub sets: Vec<(String, Operand)>,
    pub parses: Vec<String>,
}

/// Dataset that answers every `get` with the same value.
#[derive(Debug, Clone, Default)]
pub struct StubDataset {
    value: Option<Operand>,
    parse_error: Option<DatasetError>,
    log: Arc<Mutex<DatasetLog>>,
}

impl StubDataset {
    pub fn returning(value: Operand) -> Self {
        Self {
            value: Some(value),
            ..Self::default()
        }
    }

    pub fn failing_parse(error: DatasetError) -> Self {
        Self {
            parse_error: Some(error),
            ..Self::default()
        }
    }

    pub fn log(&self) -> DatasetLog {
        self.log.lock().unwrap().clone()
    }
}

impl Dataset for StubDataset {
    fn get(&self, raw: &str) -> Result<Operand, DatasetError> {
        self.log.lock().unwrap().gets.push(raw.to_string());
        self.value
            .clone()
            .ok_or_else(|| DatasetError::UnknownKey(raw.to_string()))
    }

    fn set(&mut self, key: &str, value: Operand) -> Result<(), DatasetError> {
        self.log.lock().unwrap().sets.push((key.to_string(), value));
        Ok(())
    }

    fn parse(&mut self, scenario: &ScenarioDescriptor) -> Result<(), DatasetError> {
        self.log.lock().unwrap().parses.push(scenario.name.clone());
        match &self.parse_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

/// Response whose lookups return fixed values and record their arguments.
#[derive(Debug, Clone)]
pub struct StubResponse {
    pub status: u16,
    pub timing: f64,
    pub body: Operand,
    pub body_value: Operand,
    pub headers: HashMap<String, String>,
    pub prefix: String,
    pub lookups: Arc<Mutex<Vec<String>>>,
}

impl Default for StubResponse {
    fn default() -> Self {
        Self {
            status: 200,
            timing: 0.0,
            body: Operand::Undefined,
            body_value: Operand::null(),
            headers: HashMap::new(),
            prefix: "[POST /users]".to_string(),
            lookups: Arc::default(),
        }
    }
}

impl StubResponse {
    /// Response whose `find_in_body` always yields `value`.
    pub fn finding(value: impl Into<Operand>) -> Self {
        Self {
            body_value: value.into(),
            ..Self::default()
        }
    }

    pub fn with_body(mut self, body: impl Into<Operand>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_string(), value.to_string());
        self
    }

    /// Paths and header names looked up so far.
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

impl ResponseLocator for StubResponse {
    fn status_code(&self) -> u16 {
        self.status
    }

    fn timing(&self) -> f64 {
        self.timing
    }

    fn body(&self) -> Operand {
        self.body.clone()
    }

    fn find_in_body(&self, path: &str) -> Result<Operand, LocatorError> {
        self.lookups.lock().unwrap().push(path.to_string());
        Ok(self.body_value.clone())
    }

    fn find_in_header(&self, name: &str) -> Result<Operand, LocatorError> {
        self.lookups.lock().unwrap().push(name.to_string());
        Ok(self.headers.get(name).cloned().into())
    }

    fn prefix(&self) -> &str {
        &self.prefix
    }
}

/// Clock frozen at a given instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Everything a predicate test needs to inspect after the call.
pub struct Harness {
    pub ctx: ScenarioContext,
    pub assert: Arc<RecordingAssert>,
    pub data: StubDataset,
    pub response: StubResponse,
}

impl Harness {
    pub fn new(response: StubResponse) -> Self {
        Self::with_data(response, StubDataset::default())
    }

    pub fn with_data(response: StubResponse, data: StubDataset) -> Self {
        let now = DateTime::parse_from_rfc3339("2019-04-07T10:20:30Z")
            .unwrap()
            .with_timezone(&Utc);
        Self::with_clock(response, data, now)
    }

    pub fn with_clock(response: StubResponse, data: StubDataset, now: DateTime<Utc>) -> Self {
        let assert = Arc::new(RecordingAssert::default());
        let mut ctx = ScenarioContext::new(
            Box::new(data.clone()),
            assert.clone(),
            Arc::new(FixedClock(now)),
        );
        ctx.set_response(response.clone());
        Self {
            ctx,
            assert,
            data,
            response,
        }
    }

    /// The single assertion call the predicate made.
    pub fn only_call(&self) -> AssertCall {
        let calls = self.assert.calls();
        assert_eq!(calls.len(), 1, "expected exactly one assertion call");
        calls[0].clone()
    }
}
