//! ensure serde is working as expected

use super::*;

#[test]
fn test_serde() {
    #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq, Eq)]
    struct MyTypes {
        gid: GlyphId,
        code: CompressedCodepoint,
        range: CodepointRange,
    }

    let my_instance = MyTypes {
        gid: GlyphId::new(69),
        code: compress(0x1F600),
        range: CodepointRange::PrivateUse,
    };

    let dumped = serde_json::to_string(&my_instance).unwrap();
    let loaded: MyTypes = serde_json::from_str(&dumped).unwrap();
    assert_eq!(my_instance, loaded)
}
