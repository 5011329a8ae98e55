use anyhow::Result;
use serde::Serialize;
use serde_json::{json, Value};
use std::io::{self, Write};

pub fn plan_envelope<T: Serialize>(op: &str, plan: &T) -> Value {
    json!({ "op": op, "apply": false, "plan": plan })
}

pub fn result_envelope<T: Serialize>(op: &str, result: &T) -> Value {
    json!({ "op": op, "apply": true, "result": result })
}

pub fn print_plan<T: Serialize>(op: &str, plan: &T) -> Result<()> {
    write_line(&plan_envelope(op, plan))
}

pub fn print_result<T: Serialize>(op: &str, result: &T) -> Result<()> {
    write_line(&result_envelope(op, result))
}

fn write_line(env: &Value) -> Result<()> {
    let mut out = io::stdout();
    serde_json::to_writer(&mut out, env)?;
    writeln!(&mut out)?;
    Ok(())
}
