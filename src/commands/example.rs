//! Example command handler

use anyhow::Result;

use codekit::samples::{sample, SampleKind};

use super::Context;

#[cfg(not(tarpaulin_include))]
pub fn handle(ctx: &Context, kind: SampleKind) -> Result<()> {
    ctx.emit(sample(kind), None, "example")
}
