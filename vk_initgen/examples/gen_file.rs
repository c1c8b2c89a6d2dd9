use std::env;
use std::fs::File;
use std::path::PathBuf;

fn main() {
    let sdk = env::var_os("VULKAN_SDK").map(PathBuf::from);
    let header = vk_initgen::resolve_header_path(None, sdk.as_deref()).unwrap();
    let lines = vk_initgen::load_header(header).unwrap();

    vk_initgen::InitRegistry::new(&lines).unwrap()
                             .gen_initializers(&mut File::create("vulkan_initializers.cpp").unwrap(),
                                               Default::default())
                             .unwrap();
}
