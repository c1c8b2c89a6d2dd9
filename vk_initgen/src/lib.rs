//! Generates `sType`-prefilled initializer helpers for the Vulkan C API. In order to use, first
//! load the lines of `vulkan_core.h` with [`load_header()`], build an [`InitRegistry`] from them,
//! and then call [`gen_initializers()`] with any `io::Write` sink. Further documentation can be
//! found in [`InitRegistry`] and [`GenConfig`].
//!
//! Every generated line has the shape
//!
//! ```c
//! static inline VkBufferCreateInfo vk_buffer_create_info(VkBufferCreateInfo value = {}) { value.sType = VK_STRUCTURE_TYPE_BUFFER_CREATE_INFO; return value; }
//! ```
//!
//! [`InitRegistry`]: ./struct.InitRegistry.html
//! [`GenConfig`]: ./struct.GenConfig.html
//! [`load_header()`]: ./fn.load_header.html
//! [`gen_initializers()`]: ./struct.InitRegistry.html#method.gen_initializers

mod error;
mod header;
pub mod registry;
pub mod generator;

pub use error::{Error, Result};
pub use header::{load_header, parse_header, resolve_header_path, RawLine, SDK_HEADER_PATH};
pub use registry::{InitRegistry, MatchedInitializer};
pub use generator::GenConfig;
