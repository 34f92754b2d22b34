use std::fmt::{self, Display};

use super::{escape_html, escape_html_attr, Node};

/// 渲染树中的元素节点
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    // 属性（名, 值），值为 None 时输出为布尔属性
    pub attributes: Vec<(String, Option<String>)>,
    pub classes: Vec<String>,
    // 样式变量（例如 `--i: 3`）
    pub style: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            ..Self::default()
        }
    }

    pub fn attribute(mut self, name: &str, value: impl ToString) -> Self {
        self.attributes.push((name.to_string(), Some(value.to_string())));
        self
    }

    /// 不带值的布尔属性，例如 `data-typewriter-by-letter`
    pub fn flag(mut self, name: &str) -> Self {
        self.attributes.push((name.to_string(), None));
        self
    }

    pub fn class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn style_variable(mut self, name: &str, value: impl ToString) -> Self {
        self.style.push((name.to_string(), value.to_string()));
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.iter().any(|(key, _)| key == name)
    }

    /// 属性值；布尔属性返回 `Some("")`
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_deref().unwrap_or(""))
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn get_style_variable(&self, name: &str) -> Option<&str> {
        self.style
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// 所有文本子节点按顺序拼接的内容
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text
    }

    pub(super) fn collect_text(&self, into: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(value) => into.push_str(value),
                Node::Element(element) => element.collect_text(into),
            }
        }
    }

    /// 深度优先（先序）遍历所有后代元素，不包括自身
    pub fn descendants(&self) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_descendants(&mut found);
        found
    }

    fn collect_descendants<'a>(&'a self, found: &mut Vec<&'a Element>) {
        for child in &self.children {
            if let Node::Element(element) = child {
                found.push(element);
                element.collect_descendants(found);
            }
        }
    }

    /// 带有指定属性的所有后代元素，按文档顺序
    pub fn find_all_with_attribute(&self, name: &str) -> Vec<&Element> {
        self.descendants()
            .into_iter()
            .filter(|element| element.has_attribute(name))
            .collect()
    }

    /// 第一个带有指定属性值的后代元素
    pub fn find_by_attribute(&self, name: &str, value: &str) -> Option<&Element> {
        self.descendants()
            .into_iter()
            .find(|element| element.get_attribute(name) == Some(value))
    }

    pub fn find_all_with_class(&self, class: &str) -> Vec<&Element> {
        self.descendants()
            .into_iter()
            .filter(|element| element.has_class(class))
            .collect()
    }
}

impl Display for Element {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "<{}", self.tag)?;
        if !self.classes.is_empty() {
            write!(formatter, " class=\"{}\"", escape_html_attr(&self.classes.join(" ")))?;
        }
        for (name, value) in &self.attributes {
            match value {
                Some(value) => write!(formatter, " {name}=\"{}\"", escape_html_attr(value))?,
                None => write!(formatter, " {name}")?,
            }
        }
        if !self.style.is_empty() {
            let style = self
                .style
                .iter()
                .map(|(name, value)| format!("{name}:{value}"))
                .collect::<Vec<_>>()
                .join(";");
            write!(formatter, " style=\"{}\"", escape_html_attr(&style))?;
        }
        formatter.write_str(">")?;
        for child in &self.children {
            match child {
                Node::Text(text) => formatter.write_str(&escape_html(text))?,
                Node::Element(element) => write!(formatter, "{element}")?,
            }
        }
        write!(formatter, "</{}>", self.tag)
    }
}
