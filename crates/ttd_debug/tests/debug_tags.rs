use pretty_assertions::assert_eq;
use ttd_debug::{DebugTagValues, DebugTags};

#[test]
fn tags_are_passed_through() {
    let tags = DebugTags::new();
    assert_eq!(tags.get(), DebugTagValues::default());

    tags.set_savegame_dbgl(Some("build 14.1".to_string()));
    tags.set_loadgame_dbgl("loaded dbgl");
    tags.set_save_dbgc(true);
    tags.set_loadgame_dbgc("loaded dbgc");

    assert_eq!(
        tags.get(),
        DebugTagValues {
            savegame_dbgl: Some("build 14.1".to_string()),
            loadgame_dbgl: "loaded dbgl".to_string(),
            save_dbgc: true,
            loadgame_dbgc: "loaded dbgc".to_string(),
        }
    );
}

#[test]
fn report_lists_only_present_tags() {
    let tags = DebugTags::new();
    assert_eq!(tags.to_report_string(), "Save DBGC data: false\n");

    tags.set_loadgame_dbgl("abc");
    assert_eq!(
        tags.to_report_string(),
        "Loadgame DBGL data: abc\nSave DBGC data: false\n"
    );
}
