//! Integration tests for report construction, row building and output.

use fieldrep::{
    DataType, Dir, Field, FieldType, ObjectTag, ObjectType, Report, ReportError, ReportOpts, HELP_FIELD,
};

struct Host {
    name: String,
    id: String,
    cpus: i64,
}

struct Owner {
    team: String,
}

struct Obj<'a> {
    host: Option<&'a Host>,
    owner: Option<&'a Owner>,
}

enum Data<'a> {
    Host(&'a Host),
    Owner(&'a Owner),
}

const HOST: ObjectTag = ObjectTag::new(1);
const OWNER: ObjectTag = ObjectTag::new(2);

fn types<'a>() -> Vec<ObjectType<Obj<'a>, Data<'a>>> {
    vec![
        ObjectType::new(HOST, "Hosts", "host_", |o: &Obj<'a>| o.host.map(Data::Host)).unwrap(),
        ObjectType::new(OWNER, "Owners", "owner_", |o: &Obj<'a>| o.owner.map(Data::Owner))
            .unwrap(),
    ]
}

fn fields<'a>() -> Vec<FieldType<Data<'a>>> {
    vec![
        FieldType::new(HOST, "name", "Name", "Host name", 4, DataType::Str, |f, d: &Data<'a>| {
            if let Data::Host(h) = d {
                f.report_str(h.name.as_str())
            }
        }),
        FieldType::new(HOST, "id", "ID", "Host identifier", 4, DataType::Sha, |f, d: &Data<'a>| {
            if let Data::Host(h) = d {
                f.report_sha(h.id.as_str())
            }
        }),
        FieldType::new(HOST, "cpus", "CPUs", "CPU count", 4, DataType::Num, |f, d: &Data<'a>| {
            if let Data::Host(h) = d {
                f.report_num(h.cpus)
            }
        }),
        FieldType::new(OWNER, "team", "Team", "Owning team", 4, DataType::Str, |f, d: &Data<'a>| {
            if let Data::Owner(o) = d {
                f.report_str(o.team.as_str())
            }
        }),
    ]
}

fn leave_unset(_: &mut Field, _: &Data<'_>) {}

fn host(name: &str, id: &str, cpus: i64) -> Host {
    Host {
        name: name.to_string(),
        id: id.to_string(),
        cpus,
    }
}

fn fleet() -> Vec<Host> {
    vec![
        host("web", "abc123", 8),
        host("db", "abc456", 32),
        host("cache", "ffe001", 4),
    ]
}

fn obj(h: &Host) -> Obj<'_> {
    Obj {
        host: Some(h),
        owner: None,
    }
}

/// Builds a report over `hosts`, writes it and returns the text.
fn run(selection: &str, keys: Option<&str>, opts: ReportOpts, hosts: &[Host]) -> String {
    let mut out = Vec::new();
    {
        let mut report = Report::new(types(), fields(), selection, keys, opts, &mut out).unwrap();
        for h in hosts {
            report.report_object(&obj(h)).unwrap();
        }
        report.output().unwrap();
    }
    String::from_utf8(out).unwrap()
}

fn lines(text: &str) -> Vec<&str> {
    text.lines().collect()
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn empty_selection_is_whole_catalog() {
    let report = Report::new(types(), fields(), "", None, ReportOpts::default(), Vec::new()).unwrap();
    let names: Vec<&str> = report.fields().iter().map(|f| f.name()).collect();
    assert_eq!(names, vec!["name", "id", "cpus", "team"]);
    assert_eq!(report.report_types().bits(), 3);
}

#[test]
fn report_types_cover_only_selected_fields() {
    let report =
        Report::new(types(), fields(), "name,cpus", None, ReportOpts::default(), Vec::new()).unwrap();
    assert!(report.report_types().contains(HOST));
    assert!(!report.report_types().contains(OWNER));

    let report =
        Report::new(types(), fields(), "name", Some("team"), ReportOpts::default(), Vec::new())
            .unwrap();
    assert!(report.report_types().contains(OWNER));
}

#[test]
fn empty_items_are_ignored() {
    let a = Report::new(types(), fields(), ",name,,cpus,", None, ReportOpts::default(), Vec::new())
        .unwrap();
    let b =
        Report::new(types(), fields(), "name,cpus", None, ReportOpts::default(), Vec::new()).unwrap();
    assert_eq!(a.fields(), b.fields());
}

#[test]
fn unsigned_sort_key_is_ascending() {
    let a = Report::new(types(), fields(), "name", Some("cpus"), ReportOpts::default(), Vec::new())
        .unwrap();
    let b = Report::new(types(), fields(), "name", Some("+cpus"), ReportOpts::default(), Vec::new())
        .unwrap();
    assert_eq!(a.sort_keys(), b.sort_keys());
    assert_eq!(a.sort_keys()[0].dir, Dir::Asc);
}

#[test]
fn unknown_field_lists_catalog_then_fails() {
    let mut out = Vec::new();
    let err = Report::new(types(), fields(), "name,bogus", None, ReportOpts::default(), &mut out)
        .err()
        .unwrap();
    assert!(matches!(err, ReportError::UnknownField(ref n) if n == "bogus"));

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("Special Fields\n"));
    assert!(text.contains("Hosts Fields\n"));
    assert!(text.contains("Owners Fields\n"));
    assert!(text.contains(" - CPU count [num]\n"));
    assert!(text.ends_with("Unrecognised field: bogus\n"));
}

#[test]
fn unknown_sort_key_fails() {
    let mut out = Vec::new();
    let err = Report::new(types(), fields(), "name", Some("-nope"), ReportOpts::default(), &mut out)
        .err()
        .unwrap();
    assert!(matches!(err, ReportError::UnknownSortKey(ref n) if n == "nope"));
    let text = String::from_utf8(out).unwrap();
    assert!(text.ends_with("Unrecognised field: -nope\n"));
}

#[test]
fn bare_sign_sort_key_fails() {
    let err = Report::new(types(), fields(), "name", Some("+"), ReportOpts::default(), Vec::new())
        .err()
        .unwrap();
    assert!(matches!(err, ReportError::EmptySortKey));
}

// ============================================================================
// Row building
// ============================================================================

#[test]
fn missing_object_kind_fails_the_report() {
    let h = host("web", "abc123", 8);
    let mut report =
        Report::new(types(), fields(), "name,team", None, ReportOpts::default(), Vec::new()).unwrap();
    let err = report.report_object(&obj(&h)).unwrap_err();
    assert!(matches!(err, ReportError::NoData { ref field } if field == "team"));
}

#[test]
fn unset_value_fails_the_report() {
    let h = host("web", "abc123", 8);
    let mut catalog = fields();
    catalog.push(FieldType::new(HOST, "blank", "Blank", "Never set", 4, DataType::Str, leave_unset));
    let mut report =
        Report::new(types(), catalog, "name,blank", None, ReportOpts::default(), Vec::new()).unwrap();
    let err = report.report_object(&obj(&h)).unwrap_err();
    assert!(matches!(err, ReportError::NoValue { ref field } if field == "blank"));
}

#[test]
fn rows_combine_object_kinds() {
    let h = host("web", "abc123", 8);
    let o = Owner {
        team: "infra".to_string(),
    };
    let mut out = Vec::new();
    {
        let mut report =
            Report::new(types(), fields(), "name,team", None, ReportOpts::default(), &mut out)
                .unwrap();
        report
            .report_object(&Obj {
                host: Some(&h),
                owner: Some(&o),
            })
            .unwrap();
        report.output().unwrap();
    }
    assert_eq!(String::from_utf8(out).unwrap(), "Name Team \nweb  infra\n");
}

// ============================================================================
// Widths
// ============================================================================

#[test]
fn hash_column_keeps_minimum_when_unique() {
    let hosts = vec![host("a", "abc123", 1), host("b", "abc456", 2)];
    let text = run("id", None, ReportOpts::default().min_sha_width(4), &hosts);
    assert_eq!(lines(&text), vec!["ID  ", "abc1", "abc4"]);
}

#[test]
fn hash_column_grows_until_unique() {
    let hosts = vec![host("a", "abcd11", 1), host("b", "abcd12", 2)];
    let text = run("id", None, ReportOpts::default().min_sha_width(4), &hosts);
    assert_eq!(lines(&text), vec!["ID    ", "abcd11", "abcd12"]);
}

#[test]
fn string_column_grows_to_widest_value() {
    let text = run("name", None, ReportOpts::default(), &fleet());
    assert_eq!(lines(&text), vec!["Name ", "web  ", "db   ", "cache"]);
}

// ============================================================================
// Sorting
// ============================================================================

#[test]
fn numeric_sort_both_directions() {
    let opts = ReportOpts::default().aligned(false).headings(false);
    let asc = run("name", Some("cpus"), opts.clone(), &fleet());
    assert_eq!(lines(&asc), vec!["cache", "web", "db"]);

    let desc = run("name", Some("-cpus"), opts, &fleet());
    assert_eq!(lines(&desc), vec!["db", "web", "cache"]);
}

#[test]
fn hidden_sort_column_is_not_displayed() {
    let text = run("name", Some("-cpus"), ReportOpts::default(), &fleet());
    assert_eq!(lines(&text), vec!["Name ", "db   ", "web  ", "cache"]);
}

#[test]
fn multi_key_sort_breaks_ties() {
    let hosts = vec![
        host("b", "000001", 2),
        host("a", "000002", 2),
        host("c", "000003", 1),
    ];
    let opts = ReportOpts::default().aligned(false).headings(false);
    let text = run("name", Some("-cpus,name"), opts, &hosts);
    assert_eq!(lines(&text), vec!["a", "b", "c"]);
}

#[test]
fn no_sort_keys_keep_insertion_order() {
    let opts = ReportOpts::default().aligned(false).headings(false);
    let text = run("name", None, opts, &fleet());
    assert_eq!(lines(&text), vec!["web", "db", "cache"]);
}

// ============================================================================
// Output options
// ============================================================================

#[test]
fn default_layout() {
    let text = run("name,id,cpus", Some("name"), ReportOpts::default(), &fleet());
    assert_eq!(
        lines(&text),
        vec![
            "Name  ID      CPUs",
            "cache ffe001     4",
            "db    abc456    32",
            "web   abc123     8",
        ]
    );
}

#[test]
fn no_headings() {
    let text = run("name", None, ReportOpts::default().headings(false), &fleet());
    assert_eq!(lines(&text).len(), 3);
    assert!(!text.contains("Name"));
}

#[test]
fn separator_prefix_and_quotes() {
    let opts = ReportOpts::default()
        .separator(" ")
        .field_name_prefix("HOST_")
        .unquoted(false)
        .aligned(false)
        .headings(false);
    let hosts = vec![host("web", "abc123", 8)];
    let text = run("name,cpus", None, opts, &hosts);
    assert_eq!(text, "HOST_NAME='web' HOST_CPUS='8'\n");
}

#[test]
fn custom_separator() {
    let opts = ReportOpts::default().separator(",").aligned(false);
    let hosts = vec![host("web", "abc123", 8)];
    let text = run("name,cpus", None, opts, &hosts);
    assert_eq!(text, "Name,CPUs\nweb,8\n");
}

#[test]
fn columns_as_rows_transposes() {
    let opts = ReportOpts::default().columns_as_rows(true).aligned(false);
    let hosts = vec![host("web", "abc123", 8), host("db", "abc456", 32)];
    let text = run("name,cpus", None, opts, &hosts);
    assert_eq!(text, "Name web db\nCPUs 8 32\n");
}

// ============================================================================
// Lifecycle
// ============================================================================

#[test]
fn output_is_written_once() {
    let hosts = fleet();
    let mut out = Vec::new();
    {
        let mut report =
            Report::new(types(), fields(), "name", None, ReportOpts::default(), &mut out).unwrap();
        for h in &hosts {
            report.report_object(&obj(h)).unwrap();
        }
        assert_eq!(report.output().unwrap(), 3);
        assert_eq!(report.output().unwrap(), 0);
    }
    let text = String::from_utf8(out).unwrap();
    assert_eq!(lines(&text).len(), 4);
}

#[test]
fn help_lists_catalog_and_ignores_rows() {
    let h = host("web", "abc123", 8);
    let mut out = Vec::new();
    {
        let mut report =
            Report::new(types(), fields(), HELP_FIELD, None, ReportOpts::default(), &mut out)
                .unwrap();
        assert!(report.is_help());
        report.report_object(&obj(&h)).unwrap();
        assert!(report.rows().is_empty());
        assert_eq!(report.output().unwrap(), 0);
    }
    let text = String::from_utf8(out).unwrap();
    let expected = "\
Special Fields
--------------
  help      - Show help [str]
 
Hosts Fields
------------
  name      - Host name [str]
  id        - Host identifier [sha]
  cpus      - CPU count [num]
 
Owners Fields
-------------
  team      - Owning team [str]

";
    assert_eq!(text, expected);
}

#[test]
fn unbuffered_rows_are_written_immediately() {
    let hosts = vec![
        host("web", "abc123", 8),
        host("database", "abc456", 32),
        host("cache", "ffe001", 4),
    ];
    let mut out = Vec::new();
    let opts = ReportOpts::default().buffered(false);
    let mut report = Report::new(types(), fields(), "name,id,cpus", Some("-cpus"), opts, &mut out)
        .unwrap();
    for h in &hosts {
        report.report_object(&obj(h)).unwrap();
    }
    assert!(report.rows().is_empty());
    assert_eq!(report.output().unwrap(), 3);
    drop(report);

    let text = String::from_utf8(out).unwrap();
    assert_eq!(
        lines(&text),
        vec![
            "Name ID   CPUs",
            "web  abc1    8",
            "data abc4   32",
            "cach ffe0    4",
        ]
    );
}
