use crate::error::NexusResult;
use crate::pipeline::ProcessingStage;
use serde_json::Value;

type StageFn = dyn Fn(Value) -> NexusResult<Value> + Send + Sync;

/// Stage backed by a closure
pub struct FnStage {
    name: String,
    func: Box<StageFn>,
}

impl FnStage {
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(Value) -> NexusResult<Value> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: Box::new(func),
        }
    }
}

impl ProcessingStage for FnStage {
    fn process(&self, value: Value) -> NexusResult<Value> {
        (self.func)(value)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fn_stage_applies_closure() {
        let stage = FnStage::new("negate", |v: Value| Ok(json!(-v.as_i64().unwrap_or(0))));
        assert_eq!(stage.process(json!(4)).unwrap(), json!(-4));
        assert_eq!(stage.name(), "negate");
    }
}
