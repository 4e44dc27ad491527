use portfolio_render::core::fetcher::parse_document;
use portfolio_render::core::render::{
    bio_markup, contact_markup, projects_markup, render_bio, render_contact, render_projects,
};
use portfolio_render::{HtmlPage, MemoryPage, Project, RegionSelectors};

const SCENARIO: &str = r#"{"bio":{"avatar":"a.png","name":"Jane","title":"Dev","description":"Hi"},"projects":[{"image":"p.png","title":"X","description":"Y","link":"http://x"}],"contact":{"email":"j@e.com","linkedin":"http://li","github":"http://gh"}}"#;

fn project(title: &str) -> Project {
    Project {
        image: format!("{}.png", title),
        title: title.to_string(),
        description: format!("{} description", title),
        link: format!("https://example.com/{}", title),
    }
}

fn render_all(html: &str, json: &str) -> String {
    let document = parse_document(json.as_bytes()).unwrap();
    let selectors = RegionSelectors::default();
    let mut page = HtmlPage::parse(html, &selectors.as_array());

    render_bio(&mut page, &selectors.bio, &document.bio).unwrap();
    render_projects(&mut page, &selectors.projects, &document.projects).unwrap();
    render_contact(&mut page, &selectors.contact, &document.contact).unwrap();
    page.to_html()
}

const PAGE: &str =
    "<div class=\"header\"></div><div class=\"projects\"></div><div class=\"contact\"></div>";

#[test]
fn test_concrete_scenario() {
    let document = parse_document(SCENARIO.as_bytes()).unwrap();
    let selectors = RegionSelectors::default();
    let mut page = HtmlPage::parse(PAGE, &selectors.as_array());

    render_bio(&mut page, &selectors.bio, &document.bio).unwrap();
    render_projects(&mut page, &selectors.projects, &document.projects).unwrap();
    render_contact(&mut page, &selectors.contact, &document.contact).unwrap();

    let bio = page.inner_html(".header").unwrap();
    assert!(bio.contains("<img src=\"a.png\""));
    assert!(bio.contains("<h1>Jane</h1>"));
    assert!(bio.find("<p>Dev</p>").unwrap() < bio.find("<p>Hi</p>").unwrap());

    let projects = page.inner_html(".projects").unwrap();
    assert_eq!(projects.matches("class=\"project\"").count(), 1);
    assert!(projects.contains("<h3>X</h3>"));
    assert!(projects.contains("<p>Y</p>"));
    assert!(projects.contains("href=\"http://x\" target=\"_blank\">View Project</a>"));

    let contact = page.inner_html(".contact").unwrap();
    assert!(contact.contains("<a href=\"mailto:j@e.com\">j@e.com</a>"));
    assert!(contact.contains("href=\"http://li\" target=\"_blank\">LinkedIn</a>"));
    assert!(contact.contains("href=\"http://gh\" target=\"_blank\" class=\"github\">GitHub</a>"));
}

#[test]
fn test_rendering_is_byte_identical_across_runs() {
    assert_eq!(render_all(PAGE, SCENARIO), render_all(PAGE, SCENARIO));
}

#[test]
fn test_projects_follow_input_order() {
    let orders = [["a", "b", "c"], ["c", "a", "b"], ["b", "c", "a"]];

    for order in orders {
        let projects: Vec<Project> = order.iter().map(|title| project(title)).collect();
        let mut page = MemoryPage::with_regions(&[".projects"]);
        render_projects(&mut page, ".projects", &projects).unwrap();

        let content = page.inner_html(".projects").unwrap();
        let positions: Vec<usize> = order
            .iter()
            .map(|title| content.find(&format!("<h3>{}</h3>", title)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(content, projects_markup(&projects));
    }
}

#[test]
fn test_empty_projects_clear_region() {
    let html = "<ul class=\"projects\"><li>placeholder</li></ul>";
    let mut page = HtmlPage::parse(html, &[".projects"]);

    render_projects(&mut page, ".projects", &[]).unwrap();

    assert_eq!(page.inner_html(".projects"), Some(""));
    assert_eq!(page.to_html(), "<ul class=\"projects\"></ul>");
}

#[test]
fn test_rerender_leaves_no_residue() {
    let first = parse_document(SCENARIO.as_bytes()).unwrap();
    let mut second = first.clone();
    second.bio.name = "Ada".to_string();
    second.projects = vec![project("engine")];
    second.contact.email = "ada@example.com".to_string();

    let selectors = RegionSelectors::default();
    let mut page = HtmlPage::parse(PAGE, &selectors.as_array());
    for document in [&first, &second] {
        render_bio(&mut page, &selectors.bio, &document.bio).unwrap();
        render_projects(&mut page, &selectors.projects, &document.projects).unwrap();
        render_contact(&mut page, &selectors.contact, &document.contact).unwrap();
    }

    let html = page.to_html();
    assert!(html.contains("<h1>Ada</h1>"));
    assert!(!html.contains("Jane"));
    assert!(!html.contains("<h3>X</h3>"));
    assert!(!html.contains("j@e.com"));
    assert_eq!(html.matches("<h1>").count(), 1);
}

#[test]
fn test_markup_in_fields_passes_through_unescaped() {
    let json = SCENARIO.replace("\"description\":\"Hi\"", "\"description\":\"<b>x</b>\"");
    let html = render_all(PAGE, &json);

    assert!(html.contains("<p><b>x</b></p>"));
    assert!(!html.contains("&lt;b&gt;"));
}

#[test]
fn test_realistic_page_keeps_everything_outside_regions() {
    let html = concat!(
        "<!DOCTYPE html>\n<html>\n<head>\n",
        "  <style>.header > h1 { color: red; }</style>\n",
        "  <script>if (a < b && c > d) { el.innerHTML = '<div class=\"projects\">x</div>'; }</script>\n",
        "</head>\n<body>\n",
        "  <!-- <header class=\"header\">old header</header> -->\n",
        "  <header data-note=\"a>b\" class=\"header\">Loading...</header>\n",
        "  <section title='1 > 0' class=\"projects\"><!-- </section> --></section>\n",
        "  <footer class=\"contact\"></footer>\n",
        "</body>\n</html>\n"
    );

    let rendered = render_all(html, SCENARIO);
    let document = parse_document(SCENARIO.as_bytes()).unwrap();

    let expected = html
        .replace(
            "class=\"header\">Loading...</header>",
            &format!(
                "class=\"header\">{}</header>",
                bio_markup(&document.bio)
            ),
        )
        .replace(
            "class=\"projects\"><!-- </section> --></section>",
            &format!(
                "class=\"projects\">{}</section>",
                projects_markup(&document.projects)
            ),
        )
        .replace(
            "<footer class=\"contact\"></footer>",
            &format!(
                "<footer class=\"contact\">{}</footer>",
                contact_markup(&document.contact)
            ),
        );
    assert_eq!(rendered, expected);
    assert!(rendered.contains("<!-- <header class=\"header\">old header</header> -->"));
}
