use crate::audit::{batch, report};
use crate::display::trace;
use crate::logic::{Proposition, Quality, Quantity, Syllogism, Term};
use crate::verification::{Verdict, Verifier};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

#[pyclass(name = "_Verdict")]
#[derive(Debug, Clone)]
pub struct PyVerdict {
    pub inner: Verdict,
}

#[pymethods]
impl PyVerdict {
    pub fn valid(&self) -> bool {
        self.inner.valid
    }

    pub fn errors(&self) -> Vec<String> {
        self.inner
            .errors
            .iter()
            .map(|v| v.message.clone())
            .collect()
    }

    pub fn explanation(&self) -> String {
        self.inner.explanation.clone()
    }

    pub fn minor_term(&self) -> Option<String> {
        self.inner
            .structure
            .as_ref()
            .map(|s| s.minor_term.name().to_string())
    }

    pub fn major_term(&self) -> Option<String> {
        self.inner
            .structure
            .as_ref()
            .map(|s| s.major_term.name().to_string())
    }

    pub fn middle_term(&self) -> Option<String> {
        self.inner
            .structure
            .as_ref()
            .and_then(|s| s.middle_term.as_ref())
            .map(|t| t.name().to_string())
    }

    pub fn to_json(&self) -> PyResult<String> {
        report::verdict_to_json(&self.inner).map_err(|e| PyValueError::new_err(e.to_string()))
    }
}

#[pyclass(name = "_Syllogism")]
#[derive(Debug, Clone, Default)]
pub struct PySyllogism {
    minor_premise: Option<Proposition>,
    major_premise: Option<Proposition>,
    conclusion: Option<Proposition>,
}

fn parse_proposition(
    subject: &str,
    predicate: &str,
    quantity: &str,
    quality: &str,
) -> PyResult<Proposition> {
    let quantity = match quantity {
        "universal" => Quantity::Universal,
        "particular" => Quantity::Particular,
        "singular" => Quantity::Singular,
        _ => return Err(PyValueError::new_err("Invalid quantity")),
    };
    let quality = match quality {
        "affirmative" => Quality::Affirmative,
        "negative" => Quality::Negative,
        _ => return Err(PyValueError::new_err("Invalid quality")),
    };
    Ok(Proposition::new(
        Term::new(subject),
        Term::new(predicate),
        quantity,
        quality,
    ))
}

#[pymethods]
impl PySyllogism {
    #[new]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_minor_premise(
        &mut self,
        subject: &str,
        predicate: &str,
        quantity: &str,
        quality: &str,
    ) -> PyResult<()> {
        self.minor_premise = Some(parse_proposition(subject, predicate, quantity, quality)?);
        Ok(())
    }

    pub fn set_major_premise(
        &mut self,
        subject: &str,
        predicate: &str,
        quantity: &str,
        quality: &str,
    ) -> PyResult<()> {
        self.major_premise = Some(parse_proposition(subject, predicate, quantity, quality)?);
        Ok(())
    }

    pub fn set_conclusion(
        &mut self,
        subject: &str,
        predicate: &str,
        quantity: &str,
        quality: &str,
    ) -> PyResult<()> {
        self.conclusion = Some(parse_proposition(subject, predicate, quantity, quality)?);
        Ok(())
    }

    #[pyo3(signature = (figure = 1))]
    pub fn verify(&self, figure: u8) -> PyResult<PyVerdict> {
        let syllogism = self.assemble()?;
        Ok(PyVerdict {
            inner: Verifier::new(&syllogism).verify(figure),
        })
    }

    #[pyo3(signature = (figure = 1))]
    pub fn trace(&self, figure: u8) -> PyResult<String> {
        let syllogism = self.assemble()?;
        let verdict = Verifier::new(&syllogism).verify(figure);
        Ok(trace::format_trace(&syllogism, &verdict))
    }
}

impl PySyllogism {
    fn assemble(&self) -> PyResult<Syllogism> {
        let minor = self
            .minor_premise
            .clone()
            .ok_or_else(|| PyValueError::new_err("Minor premise not set"))?;
        let major = self
            .major_premise
            .clone()
            .ok_or_else(|| PyValueError::new_err("Major premise not set"))?;
        let conclusion = self
            .conclusion
            .clone()
            .ok_or_else(|| PyValueError::new_err("Conclusion not set"))?;
        Ok(Syllogism::new(minor, major, conclusion))
    }
}

/// Audits a JSON-encoded chain of syllogisms and returns the verdicts as
/// a JSON array in chain order.
#[pyfunction]
pub fn audit_chain_json(json: &str) -> PyResult<String> {
    let chain =
        report::chain_from_json(json).map_err(|e| PyValueError::new_err(e.to_string()))?;
    let verdicts = batch::audit_chain(&chain);
    report::verdicts_to_json(&verdicts).map_err(|e| PyValueError::new_err(e.to_string()))
}
