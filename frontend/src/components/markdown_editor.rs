//! Markdown 编辑器
//!
//! 工具栏 + 文本域。插入逻辑是纯函数：围绕当前选区包裹语法，
//! 选区为空时填入占位文本并把光标落在占位处。

use leptos::prelude::*;

/// 工具栏支持的 Markdown 语法
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkdownSyntax {
    Bold,
    Italic,
    Code,
    CodeBlock,
    Link,
    List,
    NumberedList,
    Quote,
    Heading,
}

/// 在 `[start, end)` 选区处插入 markdown 语法
///
/// 索引按字符计，越界输入被钳制到文本边界。
/// 返回（新文本, 新光标位置）。
pub fn insert_markdown(
    text: &str,
    start: usize,
    end: usize,
    syntax: MarkdownSyntax,
) -> (String, usize) {
    let chars: Vec<char> = text.chars().collect();
    let start = start.min(chars.len());
    let end = end.clamp(start, chars.len());
    let selected: String = chars[start..end].iter().collect();
    let has_selection = !selected.is_empty();

    let or = |placeholder: &str| -> String {
        if has_selection {
            selected.clone()
        } else {
            placeholder.to_string()
        }
    };

    // cursor_back: 光标从片段末尾回退的字符数
    let (snippet, cursor_back) = match syntax {
        MarkdownSyntax::Bold => (format!("**{}**", or("粗体文本")), 2),
        MarkdownSyntax::Italic => (format!("*{}*", or("斜体文本")), 1),
        MarkdownSyntax::Code => (format!("`{}`", or("代码")), 1),
        MarkdownSyntax::CodeBlock => (format!("\n```\n{}\n```\n", or("代码块")), 5),
        // 光标落在 URL 处，便于直接替换
        MarkdownSyntax::Link => (format!("[{}](URL)", or("链接文本")), 4),
        MarkdownSyntax::List => (format!("\n- {}\n", or("列表项")), 1),
        MarkdownSyntax::NumberedList => (format!("\n1. {}\n", or("列表项")), 1),
        MarkdownSyntax::Quote => (format!("\n> {}\n", or("引用")), 1),
        MarkdownSyntax::Heading => (format!("## {}", or("标题")), 0),
    };

    let mut out: String = chars[..start].iter().collect();
    out.push_str(&snippet);
    let cursor = out.chars().count().saturating_sub(cursor_back);
    out.extend(chars[end..].iter());
    (out, cursor)
}

#[component]
pub fn MarkdownEditor(
    value: RwSignal<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let textarea_ref = NodeRef::<leptos::html::Textarea>::new();

    // 选区索引按 UTF-16 计，含代理对的文本可能偏移一两个字符
    let apply = move |syntax: MarkdownSyntax| {
        let Some(textarea) = textarea_ref.get_untracked() else {
            return;
        };
        let start = textarea.selection_start().ok().flatten().unwrap_or(0) as usize;
        let end = textarea.selection_end().ok().flatten().unwrap_or(0) as usize;

        let (new_text, cursor) = insert_markdown(&value.get_untracked(), start, end, syntax);
        value.set(new_text);

        let _ = textarea.focus();
        let _ = textarea.set_selection_range(cursor as u32, cursor as u32);
    };

    let on_keydown = move |ev: leptos::web_sys::KeyboardEvent| {
        if !(ev.ctrl_key() || ev.meta_key()) {
            return;
        }
        let syntax = match ev.key().as_str() {
            "b" => MarkdownSyntax::Bold,
            "i" => MarkdownSyntax::Italic,
            "k" => MarkdownSyntax::Link,
            _ => return,
        };
        ev.prevent_default();
        apply(syntax);
    };

    view! {
        <div class="space-y-2">
            <div class="join">
                <button type="button" class="btn btn-sm join-item font-bold" on:click=move |_| apply(MarkdownSyntax::Bold)>"B"</button>
                <button type="button" class="btn btn-sm join-item italic" on:click=move |_| apply(MarkdownSyntax::Italic)>"I"</button>
                <button type="button" class="btn btn-sm join-item font-mono" on:click=move |_| apply(MarkdownSyntax::Code)>"`"</button>
                <button type="button" class="btn btn-sm join-item font-mono" on:click=move |_| apply(MarkdownSyntax::CodeBlock)>"```"</button>
                <button type="button" class="btn btn-sm join-item" on:click=move |_| apply(MarkdownSyntax::Link)>"链接"</button>
                <button type="button" class="btn btn-sm join-item" on:click=move |_| apply(MarkdownSyntax::List)>"• 列表"</button>
                <button type="button" class="btn btn-sm join-item" on:click=move |_| apply(MarkdownSyntax::NumberedList)>"1. 列表"</button>
                <button type="button" class="btn btn-sm join-item" on:click=move |_| apply(MarkdownSyntax::Quote)>"引用"</button>
                <button type="button" class="btn btn-sm join-item" on:click=move |_| apply(MarkdownSyntax::Heading)>"H"</button>
            </div>
            <textarea
                class="textarea textarea-bordered w-full font-mono"
                rows="12"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                on:keydown=on_keydown
                node_ref=textarea_ref
            ></textarea>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_wraps_selection() {
        let (text, cursor) = insert_markdown("hello world", 0, 5, MarkdownSyntax::Bold);
        assert_eq!(text, "**hello** world");
        // 光标回退 2，落在结尾 `**` 之前
        assert_eq!(cursor, 7);
    }

    #[test]
    fn bold_without_selection_inserts_placeholder() {
        let (text, cursor) = insert_markdown("", 0, 0, MarkdownSyntax::Bold);
        assert_eq!(text, "**粗体文本**");
        assert_eq!(cursor, text.chars().count() - 2);
    }

    #[test]
    fn link_cursor_lands_on_url() {
        let (text, cursor) = insert_markdown("see docs", 4, 8, MarkdownSyntax::Link);
        assert_eq!(text, "see [docs](URL)");
        let prefix: String = text.chars().take(cursor).collect();
        assert!(prefix.ends_with('('));
    }

    #[test]
    fn code_block_surrounds_with_fences() {
        let (text, _) = insert_markdown("x = 1", 0, 5, MarkdownSyntax::CodeBlock);
        assert_eq!(text, "\n```\nx = 1\n```\n");
    }

    #[test]
    fn insertion_in_the_middle_keeps_suffix() {
        let (text, _) = insert_markdown("abcdef", 2, 4, MarkdownSyntax::Italic);
        assert_eq!(text, "ab*cd*ef");
    }

    #[test]
    fn out_of_range_indices_are_clamped() {
        let (text, _) = insert_markdown("ab", 10, 20, MarkdownSyntax::Code);
        assert_eq!(text, "ab`代码`");

        let (text, _) = insert_markdown("ab", 1, 0, MarkdownSyntax::Code);
        assert_eq!(text, "a`代码`b");
    }

    #[test]
    fn multibyte_text_is_cut_on_char_boundaries() {
        let (text, _) = insert_markdown("你好世界", 1, 3, MarkdownSyntax::Bold);
        assert_eq!(text, "你**好世**界");
    }
}
