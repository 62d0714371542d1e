use rowdag::cli::LogLevel;
use rowdag::logging::filter_directive;

#[test]
fn cli_level_wins_over_env() {
    assert_eq!(
        filter_directive(Some(LogLevel::Trace), Some("rowdag=warn")),
        "trace"
    );
}

#[test]
fn env_directive_is_used_verbatim() {
    assert_eq!(
        filter_directive(None, Some(" rowdag::level=debug,warn ")),
        "rowdag::level=debug,warn"
    );
}

#[test]
fn falls_back_to_info() {
    assert_eq!(filter_directive(None, None), "info");
    assert_eq!(filter_directive(None, Some("   ")), "info");
}
