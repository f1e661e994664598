use minijinja::{Environment, Value, default_auto_escape_callback};

mod context;

pub use context::{
    NewPostPage, PostEditPage, PostPage, TagEditPage, TagPage, TagsPage, UserEditPage, UserPage,
    UsersPage,
};

/// Turns a named template and its context into an HTML document.
pub trait ViewRenderer: Send + Sync {
    fn render(&self, template_name: &str, context: Value) -> Result<String, minijinja::Error>;
}

/// Templates compiled into the binary.
const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    ("users/list.html", include_str!("../templates/users/list.html")),
    ("users/detail.html", include_str!("../templates/users/detail.html")),
    ("users/edit.html", include_str!("../templates/users/edit.html")),
    ("users/new_post.html", include_str!("../templates/users/new_post.html")),
    ("posts/detail.html", include_str!("../templates/posts/detail.html")),
    ("posts/edit.html", include_str!("../templates/posts/edit.html")),
    ("tags/list.html", include_str!("../templates/tags/list.html")),
    ("tags/detail.html", include_str!("../templates/tags/detail.html")),
    ("tags/edit.html", include_str!("../templates/tags/edit.html")),
];

pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(default_auto_escape_callback);
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }
}

impl ViewRenderer for MiniJinjaRenderer {
    fn render(&self, template_name: &str, context: Value) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template(template_name)?;
        tmpl.render(context)
    }
}
