use crate::errors::CoreError;
use std::path::Path;

/// Output of one script execution.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScriptOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Capability interface for the optional scripting hook. Builds without
/// scripting plug in [`NoopInterpreter`]; the launcher supplies a real
/// implementation that shells out to a system interpreter.
pub trait Interpreter {
    fn run(&self, code: &str) -> Result<ScriptOutput, CoreError>;

    fn run_file(&self, path: &Path) -> Result<ScriptOutput, CoreError>;

    fn version(&self) -> String;
}

/// Stub implementation: accepts everything, executes nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopInterpreter;

impl Interpreter for NoopInterpreter {
    fn run(&self, _code: &str) -> Result<ScriptOutput, CoreError> {
        Ok(ScriptOutput::default())
    }

    fn run_file(&self, _path: &Path) -> Result<ScriptOutput, CoreError> {
        Ok(ScriptOutput::default())
    }

    fn version(&self) -> String {
        "scripting disabled".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_accepts_everything_and_runs_nothing() {
        let interp = NoopInterpreter;
        assert_eq!(interp.run("print('hi')").unwrap(), ScriptOutput::default());
        assert_eq!(
            interp.run_file(Path::new("missing.py")).unwrap(),
            ScriptOutput::default()
        );
    }

    #[test]
    fn noop_reports_scripting_disabled() {
        assert_eq!(NoopInterpreter.version(), "scripting disabled");
    }
}
