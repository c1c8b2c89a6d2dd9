pub mod crawler;

use indexmap::IndexMap;
use tracing::info;

use crate::error::Result;
use crate::header::RawLine;

/// One generated initializer: the struct it builds, the `VkStructureType` constant stored into
/// `sType`, and the name of the generated function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedInitializer<'a> {
    pub struct_name: &'a str,
    pub constant: &'a str,
    pub function_name: String,
}

/// Everything found in one pass over `vulkan_core.h`. Names are borrowed from the loaded lines,
/// so the registry cannot outlive them.
#[derive(Debug, Clone)]
pub struct InitRegistry<'a> {
    structs: IndexMap<String, &'a str>,
    initializers: IndexMap<String, MatchedInitializer<'a>>,
}

impl<'a> InitRegistry<'a> {
    /// Scans the header. Fails if the header does not look the way `vulkan_core.h` is laid out;
    /// there is no partial result.
    pub fn new(lines: &'a [RawLine]) -> Result<InitRegistry<'a>> {
        let structs = crawler::crawl_structs(lines)?;
        let declaration = crawler::find_structure_type_enum(lines)?;
        let block = crawler::enum_block(lines, declaration)?;
        let initializers = crawler::crawl_enum(block, &structs)?;

        info!(
            structs = structs.len(),
            constants = block.len(),
            initializers = initializers.len(),
            "crawled header"
        );

        Ok(InitRegistry { structs, initializers })
    }

    /// Structs with a structure type field, keyed by lower-cased name.
    pub fn structs(&self) -> &IndexMap<String, &'a str> {
        &self.structs
    }

    /// Matched initializers keyed by struct key, in the order the keys were first matched.
    pub fn initializers(&self) -> &IndexMap<String, MatchedInitializer<'a>> {
        &self.initializers
    }

    pub fn initializer(&self, struct_name: &str) -> Option<&MatchedInitializer<'a>> {
        self.initializers.get(&struct_name.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::header::parse_header;

    const HEADER: &str = "\
typedef struct VkBufferCreateInfo {
    VkStructureType        sType;
    const void*            pNext;
} VkBufferCreateInfo;

typedef struct VkExtent2D {
    uint32_t    width;
    uint32_t    height;
} VkExtent2D;

typedef struct VkBaseOutStructure {
    VkStructureType               sType;
    struct VkBaseOutStructure*    pNext;
} VkBaseOutStructure;

typedef enum VkStructureType {
    VK_STRUCTURE_TYPE_BUFFER_CREATE_INFO = 12,
    VK_STRUCTURE_TYPE_MAX_ENUM = 0x7FFFFFFF
} VkStructureType;
";

    #[test]
    fn struct_table_and_matches() {
        let lines = parse_header(HEADER);
        let registry = InitRegistry::new(&lines).unwrap();

        let structs: Vec<_> = registry.structs().values().copied().collect();
        assert_eq!(structs, ["VkBufferCreateInfo", "VkBaseOutStructure"]);

        assert_eq!(registry.initializers().len(), 1);
        assert_eq!(
            registry.initializer("VkBufferCreateInfo"),
            Some(&MatchedInitializer {
                struct_name: "VkBufferCreateInfo",
                constant: "VK_STRUCTURE_TYPE_BUFFER_CREATE_INFO",
                function_name: "vk_buffer_create_info".to_owned(),
            })
        );
        assert!(registry.initializer("VkBaseOutStructure").is_none());
        assert!(registry.initializer("VkExtent2D").is_none());
    }

    #[test]
    fn header_without_structure_type_enum() {
        let text = HEADER.replace("typedef enum VkStructureType {", "typedef enum VkSomethingElse {");
        let lines = parse_header(&text);
        assert!(matches!(InitRegistry::new(&lines), Err(Error::EnumNotFound { .. })));
    }

    #[test]
    fn rescanning_gives_the_same_registry() {
        let lines = parse_header(HEADER);
        let first = InitRegistry::new(&lines).unwrap();
        let second = InitRegistry::new(&lines).unwrap();
        assert_eq!(first.initializers(), second.initializers());
    }
}
