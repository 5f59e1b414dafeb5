use std::fmt::{Display, Formatter, Result as FmtResult, Write};

use serde_json::Value;

use crate::action::Response;
use crate::class::ClassInfo;
use crate::invocation::Invocation;
use crate::matcher::{Matcher, Params};
use crate::times::Times;

use super::failure::{report, Failure};
use super::{Call, MockOptions};

/// State shared by all handles of one mock object.
pub(crate) struct Shared {
    pub(crate) class: ClassInfo,
    pub(crate) options: MockOptions,
    pub(crate) stubbed: Vec<String>,
    pub(crate) stubs: Vec<Stub>,
    pub(crate) calls: Vec<Call>,
    pub(crate) failures: Vec<Failure>,
    pub(crate) constructor_args: Option<Vec<Value>>,
    pub(crate) check_on_drop: bool,
    pub(crate) released: bool,
}

/// Behaviour configured for one method.
pub(crate) struct Stub {
    pub(crate) method: String,
    pub(crate) params: Params,
    pub(crate) response: Response,
    pub(crate) invocation: Invocation,
    pub(crate) times: Times,
}

impl Display for Stub {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}{} [{}]", self.method, self.params, self.invocation)
    }
}

impl Shared {
    pub(crate) fn is_stubbed(&self, method: &str) -> bool {
        self.stubbed.iter().any(|m| m == method)
    }

    /// Find the stub that answers the call of `method` with `args`, count
    /// the call and return the response of the stub.
    pub(crate) fn select(&mut self, method: &str, args: &[Value]) -> Result<Response, Failure> {
        if !self.is_stubbed(method) {
            let failure = Failure::NotStubbed {
                class: self.class.name().into(),
                method: method.into(),
            };
            self.failures.push(failure.clone());

            return Err(failure);
        }

        let index = self.calls.len();
        self.calls.push(Call {
            index,
            method: method.into(),
            args: args.to_vec(),
        });

        let mut tried = String::new();
        let mut has_stubs = false;

        for stub in self.stubs.iter_mut().filter(|s| s.method == method) {
            has_stubs = true;

            let _ = writeln!(tried, "- {stub}");

            let mut is_valid = true;

            if stub.params.matches(args) {
                let _ = writeln!(tried, "    Argument matcher:    ok");
            } else {
                is_valid = false;
                let _ = writeln!(tried, "    Argument matcher:    not ok");
            }

            if stub.times.is_done() {
                is_valid = false;
                let _ = writeln!(tried, "    Call count:          done");
            } else if stub.times.is_ready() {
                let _ = writeln!(tried, "    Call count:          ready");
            } else {
                let _ = writeln!(tried, "    Call count:          ok");
            }

            if let Some(position) = stub.invocation.position() {
                if position == index {
                    let _ = writeln!(tried, "    Call position:       ok");
                } else {
                    is_valid = false;
                    let _ = writeln!(tried, "    Call position:       expected #{position}");
                }
            }

            if is_valid {
                stub.times.increment();

                return Ok(stub.response.clone());
            }
        }

        if !has_stubs {
            return Ok(Response::Default);
        }

        let failure = Failure::NoMatch {
            class: self.class.name().into(),
            method: method.into(),
            args: args
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", "),
            index,
            tried,
        };
        self.failures.push(failure.clone());

        Err(failure)
    }

    /// Failures recorded so far, plus every stub that did not receive the
    /// expected number of calls yet.
    pub(crate) fn verify(&self) -> Vec<Failure> {
        let mut failures = self.failures.clone();

        for stub in &self.stubs {
            if !stub.times.is_ready() {
                failures.push(Failure::Unsatisfied {
                    class: self.class.name().into(),
                    stub: stub.to_string(),
                    count: stub.times.count(),
                    expected: stub.invocation.describe(),
                });
            }
        }

        failures
    }

    pub(crate) fn checkpoint(&self) {
        let failures = self.verify();
        if !failures.is_empty() {
            panic!("{}", report(self.class.name(), &failures));
        }
    }
}

impl Drop for Shared {
    fn drop(&mut self) {
        if self.check_on_drop && !std::thread::panicking() {
            self.checkpoint();
        }
    }
}
