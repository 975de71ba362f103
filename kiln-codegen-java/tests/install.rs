use kiln_codegen::render::{self, Renderer};

#[test]
fn test_install_makes_builder_stencil_resolvable() {
    assert!(render::resolve(kiln_codegen_java::BUILDER_TEMPLATE).is_err());

    kiln_codegen_java::install();

    let renderer = render::resolve(kiln_codegen_java::BUILDER_TEMPLATE).unwrap();
    assert_eq!(renderer.name(), "stencil");
    assert!(render::resolve("Builder.json").is_ok());

    // Still there on the next lookup
    assert!(render::resolve(kiln_codegen_java::BUILDER_TEMPLATE).is_ok());
    assert_eq!(render::registry().supported_suffixes(), vec![".json", ".stencil"]);
}
