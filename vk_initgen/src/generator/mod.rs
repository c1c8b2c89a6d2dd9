use std::default;
use std::io::Write;

use tracing::info;

use crate::error::Result;
use crate::registry::InitRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenConfig<'a> {
    /// Written verbatim as the first line of the output, ahead of any initializer.
    pub header_comment: &'a str,
}

impl<'a> default::Default for GenConfig<'a> {
    fn default() -> GenConfig<'a> {
        GenConfig {
            header_comment: "// Generated by vk_initgen from vulkan_core.h. Do not edit.",
        }
    }
}

impl<'a> InitRegistry<'a> {
    /// Writes the header comment followed by one `static inline` initializer per matched struct.
    /// The output is meant to be included verbatim by C/C++ code, so the line shape never changes.
    pub fn gen_initializers<W: Write>(&self, out: &mut W, config: GenConfig) -> Result<()> {
        writeln!(out, "{}", config.header_comment)?;

        for init in self.initializers().values() {
            writeln!(out, include_str!("initializer_fn.in"), init.struct_name, init.function_name, init.constant)?;
        }
        out.flush()?;

        info!(initializers = self.initializers().len(), "generated initializers");
        Ok(())
    }
}
