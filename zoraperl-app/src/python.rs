use std::path::Path;
use std::process::Command;
use tracing::debug;
use zoraperl_core::{CoreError, Interpreter, ScriptOutput};

/// Interpreter names probed in order.
const PYTHON_CANDIDATES: [&str; 2] = ["python", "python3"];

/// Scripting hook backed by a system Python, found by probing `python` and
/// then `python3`. Construction fails if neither answers `--version`.
pub struct PythonInterpreter {
    program: String,
    version: String,
}

impl PythonInterpreter {
    pub fn detect() -> Result<Self, CoreError> {
        for program in PYTHON_CANDIDATES {
            match Command::new(program).arg("--version").output() {
                Ok(out) if out.status.success() => {
                    let version = String::from_utf8_lossy(&out.stdout)
                        .trim()
                        .to_string();
                    debug!(program, version = %version, "python found");
                    return Ok(Self {
                        program: program.to_string(),
                        version,
                    });
                }
                Ok(_) | Err(_) => {
                    debug!(program, "python candidate not usable");
                }
            }
        }
        Err(CoreError::Interpreter("no python interpreter found".to_string()))
    }

    fn capture(&self, cmd: &mut Command) -> Result<ScriptOutput, CoreError> {
        let out = cmd
            .output()
            .map_err(|e| CoreError::Interpreter(e.to_string()))?;
        let output = ScriptOutput {
            stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
        };
        if out.status.success() {
            Ok(output)
        } else {
            Err(CoreError::Interpreter(output.stderr))
        }
    }
}

impl Interpreter for PythonInterpreter {
    fn run(&self, code: &str) -> Result<ScriptOutput, CoreError> {
        debug!(code, "executing script");
        self.capture(Command::new(&self.program).arg("-c").arg(code))
    }

    fn run_file(&self, path: &Path) -> Result<ScriptOutput, CoreError> {
        debug!(path = %path.display(), "executing script file");
        self.capture(Command::new(&self.program).arg(path))
    }

    fn version(&self) -> String {
        self.version.clone()
    }
}
