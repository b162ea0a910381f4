// Integration tests for cli/options.rs — OptionTable and CommandOptions
//
// Every table starts with the base flags; tools append long options and
// short-option letters through the builder.

use ktxapp::cli::options::{OptionAction, OptionTable};
use ktxapp::{CommandOptions, HasArg, OptCode};

#[test]
fn command_options_defaults() {
    let o = CommandOptions::default();
    assert!(o.infiles.is_empty());
    assert!(o.outfile.is_empty());
    assert!(!o.test);
    assert!(o.warn);
    assert!(!o.launch_debugger);
}

#[test]
fn base_table_has_shared_flags() {
    let table: OptionTable<()> = OptionTable::builder().build();
    assert_eq!(table.find_short('h'), Some(HasArg::No));
    assert_eq!(table.find_short('v'), Some(HasArg::No));
    assert!(table.find_long("help").is_some());
    assert!(table.find_long("version").is_some());
    assert!(table.find_long("test").is_some());

    let absorbed = table.find_long("NSDocumentRevisionsDebugMode").unwrap();
    assert_eq!(absorbed.has_arg, HasArg::Required);
    assert!(matches!(absorbed.action, OptionAction::Code(OptCode::ABSORBED)));
}

#[test]
fn launch_debugger_flag_only_in_debug_builds() {
    let table: OptionTable<()> = OptionTable::builder().build();
    assert_eq!(table.find_long("ld").is_some(), cfg!(debug_assertions));
}

#[test]
fn tool_options_are_appended() {
    let table: OptionTable<u32> = OptionTable::builder()
        .short_options("fo:l::")
        .code("force", HasArg::No, 'f')
        .flag("count", |_, n| *n += 1)
        .build();
    assert_eq!(table.find_short('f'), Some(HasArg::No));
    assert_eq!(table.find_short('o'), Some(HasArg::Required));
    assert_eq!(table.find_short('l'), Some(HasArg::Optional));
    assert_eq!(table.find_short('x'), None);

    let spec = table.find_long("count").unwrap();
    let OptionAction::Set(setter) = spec.action else {
        panic!("count should be a table-bound flag");
    };
    let mut n = 0;
    setter(&mut CommandOptions::default(), &mut n);
    assert_eq!(n, 1);
}

#[test]
fn opt_code_display() {
    assert_eq!(OptCode::from('f').to_string(), "-f");
    assert_eq!(OptCode(1001).to_string(), "#1001");
    assert_eq!(OptCode::from('f').as_char(), Some('f'));
}
