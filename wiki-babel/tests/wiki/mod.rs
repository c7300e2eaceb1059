//! Wiki format tests
//!
//! Tests for bidirectional wiki markup ↔ intermediate conversion. Both directions share the
//! case table below: `markup` converts to `intermediate`, and `intermediate` converts back to
//! `canonical` (or to `markup` itself when the spelling is already canonical).

mod export;
mod import;
mod roundtrip;

pub struct Case {
    pub name: &'static str,
    pub markup: &'static str,
    pub intermediate: &'static str,
    pub canonical: Option<&'static str>,
}

impl Case {
    pub fn expected_markup(&self) -> &'static str {
        self.canonical.unwrap_or(self.markup)
    }
}

const fn case(name: &'static str, markup: &'static str, intermediate: &'static str) -> Case {
    Case {
        name,
        markup,
        intermediate,
        canonical: None,
    }
}

const fn lossy(
    name: &'static str,
    markup: &'static str,
    intermediate: &'static str,
    canonical: &'static str,
) -> Case {
    Case {
        name,
        markup,
        intermediate,
        canonical: Some(canonical),
    }
}

pub const EMPHASIS: &[Case] = &[
    case("f101", "foo ''bar'' baz", "foo <em>bar</em> baz"),
    case(
        "f102",
        "foo ''bar'' ''baz'' qux",
        "foo <em>bar</em> <em>baz</em> qux",
    ),
    case("f103", "foo '''bar''' baz", "foo <strong>bar</strong> baz"),
    case(
        "f104",
        "foo '''bar''' '''baz''' qux",
        "foo <strong>bar</strong> <strong>baz</strong> qux",
    ),
    case(
        "f105",
        "foo '''''bar''''' baz",
        "foo <strong><em>bar</em></strong> baz",
    ),
    lossy(
        "f106",
        "foo ''bar baz",
        "foo <em>bar baz</em>",
        "foo ''bar baz''",
    ),
    lossy(
        "f107",
        "foo '''bar baz",
        "foo <strong>bar baz</strong>",
        "foo '''bar baz'''",
    ),
];

pub const LINKS: &[Case] = &[
    case("l101", "foo [[Bar]] baz", r#"foo <a href="Bar">Bar</a> baz"#),
    case(
        "l102",
        "foo [[Bar|some label]] baz",
        r#"foo <a href="Bar">some label</a> baz"#,
    ),
    case(
        "l103",
        "foo [[Bar|some label|foo]] baz",
        r#"foo <a href="Bar">some label|foo</a> baz"#,
    ),
    case(
        "l201",
        "foo [https://example.org Example] baz",
        r#"foo <a href="https://example.org">Example</a> baz"#,
    ),
];

pub const IMAGES: &[Case] = &[
    case(
        "i101",
        "foo [[File:filename.extension]] baz",
        r#"foo <img src="filename.extension" options="" link=""></img> baz"#,
    ),
    case(
        "i102",
        "foo [[File:filename.extension|options]] baz",
        r#"foo <img src="filename.extension" options="options" link=""></img> baz"#,
    ),
    case(
        "i103",
        "foo [[File:filename.extension|options|caption words]] baz",
        r#"foo <img src="filename.extension" options="options" link="">caption words</img> baz"#,
    ),
    case(
        "i104",
        "foo [[File:filename.extension|options|link=Internal]] baz",
        r#"foo <img src="filename.extension" options="options" link="Internal"></img> baz"#,
    ),
    case(
        "i105",
        "foo [[File:filename.extension|options|link=http://External]] baz",
        r#"foo <img src="filename.extension" options="options" link="http://External"></img> baz"#,
    ),
];

pub const OPAQUE: &[Case] = &[
    case(
        "r101",
        "foo <ref>[[ABC]]</ref> baz",
        r#"foo <ref data="W1tBQkNdXQ=="></ref> baz"#,
    ),
    case(
        "r102",
        r#"foo <ref name="qux">[[ABC]]</ref> baz"#,
        r#"foo <ref data="W1tBQkNdXQ==" name="qux"></ref> baz"#,
    ),
    case(
        "w101",
        "foo <nowiki>''qux''</nowiki> baz",
        r#"foo <nowiki data="JydxdXgnJw=="></nowiki> baz"#,
    ),
    case(
        "w102",
        "foo <nowiki abc>''qux''</nowiki> baz",
        r#"foo <nowiki data="JydxdXgnJw==" abc></nowiki> baz"#,
    ),
];

pub const TEMPLATES: &[Case] = &[
    case(
        "t101",
        "foo {{bar}} baz",
        r#"foo <template name="bar"></template> baz"#,
    ),
    case(
        "t102",
        "foo {{bar|qux}} baz",
        r#"foo <template name="bar"><arg name="">qux</arg></template> baz"#,
    ),
    case(
        "t103",
        "foo {{bar|qux|abc}} baz",
        r#"foo <template name="bar"><arg name="">qux</arg><arg name="">abc</arg></template> baz"#,
    ),
    case(
        "t104",
        "foo {{bar|qux=abc}} baz",
        r#"foo <template name="bar"><arg name="qux">abc</arg></template> baz"#,
    ),
    lossy(
        "t105",
        "foo {{bar|\nqux=abc}} baz",
        r#"foo <template name="bar"><arg name="qux">abc</arg></template> baz"#,
        "foo {{bar|qux=abc}} baz",
    ),
    lossy(
        "t106",
        "foo {{bar| qux =abc}} baz",
        r#"foo <template name="bar"><arg name="qux">abc</arg></template> baz"#,
        "foo {{bar|qux=abc}} baz",
    ),
    lossy(
        "t107",
        "foo {{bar\n|qux=abc}} baz",
        r#"foo <template name="bar"><arg name="qux">abc</arg></template> baz"#,
        "foo {{bar|qux=abc}} baz",
    ),
    lossy(
        "t108",
        "foo {{bar\n|qux=[[abc|foo]]}} baz",
        r#"foo <template name="bar"><arg name="qux"><a href="abc">foo</a></arg></template> baz"#,
        "foo {{bar|qux=[[abc|foo]]}} baz",
    ),
    case(
        "t201",
        "foo {{bar|{{qux|xyz}}|a=c}} baz",
        r#"foo <template name="bar"><arg name=""><template name="qux"><arg name="">xyz</arg></template></arg><arg name="a">c</arg></template> baz"#,
    ),
];

pub const HEADINGS: &[Case] = &[
    case("h101", "====== The Heading ======\nbar", "<h6> The Heading </h6>\nbar"),
    case("h102", "===== The Heading =====\nbar", "<h5> The Heading </h5>\nbar"),
    case("h103", "==== The Heading ====\nbar", "<h4> The Heading </h4>\nbar"),
    case("h104", "=== The Heading ===\nbar", "<h3> The Heading </h3>\nbar"),
    case("h105", "== The Heading ==\nbar", "<h2> The Heading </h2>\nbar"),
    case("h106", "= The Heading =\nbar", "<h1> The Heading </h1>\nbar"),
    case("h201", " ====== The Heading ======\nbar", " <h6> The Heading </h6>\nbar"),
    case("h202", " ===== The Heading =====\nbar", " <h5> The Heading </h5>\nbar"),
    case("h203", " ==== The Heading ====\nbar", " <h4> The Heading </h4>\nbar"),
    case("h204", " === The Heading ===\nbar", " <h3> The Heading </h3>\nbar"),
    case("h205", " == The Heading ==\nbar", " <h2> The Heading </h2>\nbar"),
    case("h206", " = The Heading =\nbar", " <h1> The Heading </h1>\nbar"),
    case("h301", "foo\n====== The Heading ======\nbar", "foo\n<h6> The Heading </h6>\nbar"),
    case("h302", "foo\n===== The Heading =====\nbar", "foo\n<h5> The Heading </h5>\nbar"),
    case("h303", "foo\n==== The Heading ====\nbar", "foo\n<h4> The Heading </h4>\nbar"),
    case("h304", "foo\n=== The Heading ===\nbar", "foo\n<h3> The Heading </h3>\nbar"),
    case("h305", "foo\n== The Heading ==\nbar", "foo\n<h2> The Heading </h2>\nbar"),
    case("h306", "foo\n= The Heading =\nbar", "foo\n<h1> The Heading </h1>\nbar"),
];

pub const LISTS: &[Case] = &[
    case("o101", "Foo\n* Bar\n* Baz\nQux", "Foo\n<li> Bar</li>\n<li> Baz</li>\nQux"),
    case("o102", "Foo\n# Bar\n# Baz\nQux", "Foo\n<oli> Bar</oli>\n<oli> Baz</oli>\nQux"),
    case("o103", "Foo\n*Bar\n*Baz\nQux", "Foo\n<li>Bar</li>\n<li>Baz</li>\nQux"),
    case("o104", "Foo\n#Bar\n#Baz\nQux", "Foo\n<oli>Bar</oli>\n<oli>Baz</oli>\nQux"),
];

pub const TABLES: &[Case] = &[
    case(
        "g101",
        "Foo\n{|\n|-\n|Bar\n|}\nQux",
        "Foo\n<table >\n<tr >\n<td >Bar</td>\n</tr>\n</table>\nQux",
    ),
    case(
        "g102",
        "Foo\n{|\n|-\n|Bar\n|Baz\n|}\nQux",
        "Foo\n<table >\n<tr >\n<td >Bar</td>\n<td >Baz</td>\n</tr>\n</table>\nQux",
    ),
    case(
        "g103",
        "Foo\n{|\n|-\n|Bar\n|-\n|Baz\n|}\nQux",
        "Foo\n<table >\n<tr >\n<td >Bar</td>\n</tr>\n<tr >\n<td >Baz</td>\n</tr>\n</table>\nQux",
    ),
    lossy(
        "g201",
        "Foo\n{|\n|Bar\n|}\nQux",
        "Foo\n<table >\n<tr>\n<td >Bar</td>\n</tr>\n</table>\nQux",
        "Foo\n{|\n|-\n|Bar\n|}\nQux",
    ),
    lossy(
        "g202",
        "Foo\n{|\n|Bar\n|Baz\n|}\nQux",
        "Foo\n<table >\n<tr>\n<td >Bar</td>\n<td >Baz</td>\n</tr>\n</table>\nQux",
        "Foo\n{|\n|-\n|Bar\n|Baz\n|}\nQux",
    ),
    lossy(
        "g203",
        "Foo\n{|\n|Bar\n|-\n|Baz\n|}\nQux",
        "Foo\n<table >\n<tr>\n<td >Bar</td>\n</tr>\n<tr >\n<td >Baz</td>\n</tr>\n</table>\nQux",
        "Foo\n{|\n|-\n|Bar\n|-\n|Baz\n|}\nQux",
    ),
    lossy(
        "g301",
        "Foo\n{|\n!Bar\n|}\nQux",
        "Foo\n<table >\n<tr>\n<th >Bar</th>\n</tr>\n</table>\nQux",
        "Foo\n{|\n|-\n!Bar\n|}\nQux",
    ),
    lossy(
        "g302",
        "Foo\n{|\n!Bar\n!Baz\n|}\nQux",
        "Foo\n<table >\n<tr>\n<th >Bar</th>\n<th >Baz</th>\n</tr>\n</table>\nQux",
        "Foo\n{|\n|-\n!Bar\n!Baz\n|}\nQux",
    ),
    lossy(
        "g303",
        "Foo\n{|\n!Bar\n|-\n!Baz\n|}\nQux",
        "Foo\n<table >\n<tr>\n<th >Bar</th>\n</tr>\n<tr >\n<th >Baz</th>\n</tr>\n</table>\nQux",
        "Foo\n{|\n|-\n!Bar\n|-\n!Baz\n|}\nQux",
    ),
];

pub const ALL: &[&[Case]] = &[
    EMPHASIS, LINKS, IMAGES, OPAQUE, TEMPLATES, HEADINGS, LISTS, TABLES,
];
