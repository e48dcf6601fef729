//! HTML views. Templates are compiled into the binary and auto-escaped.

use minijinja::{context, Environment, Error};
use service::books::Book;

const INDEX: &str = "index.html";
const ADD: &str = "add.html";
const EDIT: &str = "edit.html";

pub struct Views {
    env: Environment<'static>,
}

impl Views {
    pub fn new() -> Result<Self, Error> {
        let mut env = Environment::new();
        env.add_template(INDEX, include_str!("../templates/index.html"))?;
        env.add_template(ADD, include_str!("../templates/add.html"))?;
        env.add_template(EDIT, include_str!("../templates/edit.html"))?;
        Ok(Self { env })
    }

    pub fn list(&self, books: &[Book]) -> Result<String, Error> {
        self.env.get_template(INDEX)?.render(context! { books => books })
    }

    pub fn add_form(&self) -> Result<String, Error> {
        self.env.get_template(ADD)?.render(context! {})
    }

    pub fn edit_form(&self, book: &Book) -> Result<String, Error> {
        self.env.get_template(EDIT)?.render(context! {
            id => book.id,
            title => &book.title,
            rating => book.rating,
        })
    }
}
