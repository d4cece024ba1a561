//! Integration tests for the WebGAL generator.

use kag_parser::kag::testing::SCENE;
use kag_parser::kag::webgal_scene;

#[test]
fn scene_dialogue_statements() {
    let scene = webgal_scene(SCENE).unwrap();
    assert_eq!(
        scene,
        ":　经过长途跋涉，到达了郊外的森林。;\n\
         :　从这里走二小时左右，可以走到越来越熟悉的爱因兹贝伦城。;\n\
         :　但、为什么森林入口处堵着不得了的人啊。;\n"
    );
}

#[test]
fn directives_and_labels_emit_nothing() {
    let scene = webgal_scene("*page1|\n@setdaytime\n@pg\n").unwrap();
    assert_eq!(scene, "");
}

#[test]
fn parse_errors_propagate() {
    assert!(webgal_scene("@broken").is_err());
}
