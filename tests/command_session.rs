use songcraft::commands::{create_registry, CommandResult};
use songcraft::repl::build_context;
use songcraft::SongcraftConfig;

fn run(line: &str, ctx: &mut songcraft::commands::CommandContext) -> CommandResult {
    create_registry().execute(line, ctx)
}

#[test]
fn test_songwriting_session_in_g() {
    let config = SongcraftConfig::from_json(r#"{"default_key": "G"}"#).unwrap();
    let mut ctx = build_context(&config).unwrap();

    run("apply Four Chords", &mut ctx);
    assert_eq!(ctx.session.progression().names(), ["G", "D", "Em", "C"]);
    assert_eq!(
        ctx.session.detect_pattern().map(|p| p.name),
        Some("Four Chords")
    );

    run("undo", &mut ctx);
    run("add Am", &mut ctx);
    assert!(ctx.session.detect_pattern().is_none());

    run("key F", &mut ctx);
    run("clear", &mut ctx);
    run("apply i bVI bIII bVII", &mut ctx);
    assert_eq!(ctx.session.progression().names(), ["Fm", "Db", "Ab", "Eb"]);
    assert_eq!(ctx.session.detect_pattern().map(|p| p.name), Some("Minor Pop"));
}

#[test]
fn test_errors_do_not_change_state() {
    let mut ctx = build_context(&SongcraftConfig::default()).unwrap();
    assert!(matches!(run("key Q#", &mut ctx), CommandResult::Error(_)));
    assert!(matches!(run("genre opera", &mut ctx), CommandResult::Error(_)));
    assert!(matches!(run("write duration -5", &mut ctx), CommandResult::Error(_)));
    assert_eq!(ctx.session.key().name(), "C");
    assert_eq!(ctx.session.genre_filter(), None);
    assert_eq!(ctx.writing.duration_secs(), 600);
    assert!(matches!(run("rhymes light", &mut ctx), CommandResult::Error(_)));
    assert!(matches!(run("play C", &mut ctx), CommandResult::NotACommand));
}

#[test]
fn test_writing_sprint() {
    let config = SongcraftConfig::from_json(r#"{"writing_duration_secs": 5}"#).unwrap();
    let mut ctx = build_context(&config).unwrap();

    run("write start", &mut ctx);
    assert!(ctx.writing.prompt().is_some());
    assert!(!ctx.writing.tick(4));
    assert!(ctx.writing.tick(1));

    match run("write", &mut ctx) {
        CommandResult::Message(msg) => assert!(msg.contains("00:00")),
        other => panic!("unexpected {:?}", other),
    }
}
