//! Module that contains the crawler functions that walk the lines of `vulkan_core.h` and collect
//! the struct table and the matched initializers. Nothing here parses C; every decision is made by
//! looking for fixed markers in single lines.
use boolinator::Boolinator;
use indexmap::IndexMap;
use tracing::{debug, trace};

use super::MatchedInitializer;
use crate::error::{Error, Result};
use crate::header::RawLine;

pub const STRUCT_DECLARATION: &str = "typedef struct";
pub const STRUCTURE_TYPE_FIELD: &str = "VkStructureType";
pub const STRUCTURE_TYPE_ENUM: &str = "typedef enum VkStructureType";
pub const ENUM_TERMINATOR: &str = ";";

const CONSTANT_INFIX: &str = "_STRUCTURE_TYPE";
const KEY_PREFIX: &str = "vk";
/// `VK`, `STRUCTURE` and `TYPE`. Dropped by count, whatever they spell.
const CONSTANT_PREFIX_SEGMENTS: usize = 3;
const KHR_SUFFIX: &str = "khr";

/// Returns the struct name if `line` declares a struct and the line right after it mentions the
/// structure type field. In `vulkan_core.h` that field is always `sType`, and always first.
pub fn announced_struct<'a>(line: &'a RawLine, next: Option<&RawLine>) -> Result<Option<&'a str>> {
    if !line.contains(STRUCT_DECLARATION) {
        return Ok(None);
    }
    let next = next.ok_or(Error::TruncatedStruct { line: line.number() })?;

    next.contains(STRUCTURE_TYPE_FIELD)
        .as_some_from(|| line.token(2).ok_or(Error::MissingStructName { line: line.number() }))
        .transpose()
}

/// Collects every struct with a structure type field, keyed by its lower-cased name.
pub fn crawl_structs(lines: &[RawLine]) -> Result<IndexMap<String, &str>> {
    let mut structs = IndexMap::with_capacity(1024);

    for (i, line) in lines.iter().enumerate() {
        if let Some(name) = announced_struct(line, lines.get(i + 1))? {
            if let Some(old) = structs.insert(name.to_lowercase(), name) {
                debug!(old, new = name, line = line.number(), "struct key declared twice, keeping the later one");
            }
        }
    }

    Ok(structs)
}

/// Index of the `VkStructureType` enum declaration. The header declares it once; if it somehow
/// shows up more than once, the last declaration is the one used.
pub fn find_structure_type_enum(lines: &[RawLine]) -> Result<usize> {
    lines
        .iter()
        .rposition(|l| l.contains(STRUCTURE_TYPE_ENUM))
        .ok_or(Error::EnumNotFound { declaration: STRUCTURE_TYPE_ENUM })
}

/// The constant lines of the enum declared at `declaration`, up to (excluding) the first line
/// containing the terminator.
pub fn enum_block(lines: &[RawLine], declaration: usize) -> Result<&[RawLine]> {
    let start = declaration + 1;
    let body = lines.get(start..).unwrap_or(&[]);
    let len = body
        .iter()
        .position(|l| l.contains(ENUM_TERMINATOR))
        .ok_or(Error::UnterminatedEnum { line: declaration + 1 })?;

    Ok(&body[..len])
}

/// `VK_STRUCTURE_TYPE_BUFFER_CREATE_INFO` -> `vkbuffercreateinfo`
pub fn struct_key(constant: &str) -> String {
    let lowered = constant.to_lowercase();
    let mut key = String::with_capacity(lowered.len());
    key.push_str(KEY_PREFIX);
    key.extend(lowered.split('_').skip(CONSTANT_PREFIX_SEGMENTS));
    key
}

/// `VK_STRUCTURE_TYPE_SWAPCHAIN_CREATE_INFO_KHR` -> `vk_swapchain_create_info_KHR`
///
/// Only a trailing `khr` gets upper-cased again. `EXT`, `NV`, `AMD` and every other vendor
/// suffix stay lower-case.
pub fn function_name(constant: &str) -> String {
    let mut name = constant.replace(CONSTANT_INFIX, "").to_lowercase();
    if name.ends_with(KHR_SUFFIX) {
        let cut = name.len() - KHR_SUFFIX.len();
        name.replace_range(cut.., &KHR_SUFFIX.to_uppercase());
    }
    name
}

/// Walks the enum block and matches every constant against the struct table. Matches are keyed
/// by struct key, so a later constant for the same struct replaces the earlier one while the key
/// keeps its original position.
pub fn crawl_enum<'a>(
    block: &'a [RawLine],
    structs: &IndexMap<String, &'a str>,
) -> Result<IndexMap<String, MatchedInitializer<'a>>> {
    let mut matched = IndexMap::with_capacity(structs.len());

    for line in block {
        let constant = line
            .token(0)
            .ok_or(Error::MissingConstantName { line: line.number() })?;
        let key = struct_key(constant);

        let struct_name = match structs.get(&key) {
            Some(&name) => name,
            None => {
                trace!(constant, "no struct for constant");
                continue;
            }
        };

        let init = MatchedInitializer {
            struct_name,
            constant,
            function_name: function_name(constant),
        };
        if let Some(old) = matched.insert(key, init) {
            debug!(struct_name, old = old.constant, new = constant, "struct matched twice, keeping the later constant");
        }
    }

    Ok(matched)
}
