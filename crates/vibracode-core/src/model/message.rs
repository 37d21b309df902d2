// SPDX-FileCopyrightText: 2026 Vibracode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Message entity, tool-invocation payloads, and usage metrics.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::CreationStamped;

/// Who authored a message. Fixed at creation, never edited.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

/// A shell command run by the agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BashInvocation {
    pub command: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
}

/// A file edit applied by the agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEdit {
    pub file_path: String,
    pub old_string: String,
    pub new_string: String,
}

/// A file read by the agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRead {
    pub file_path: String,
}

/// A web search performed by the agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebSearch {
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<String>,
}

/// A semantic search over the session's codebase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodebaseSearch {
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_directories: Option<Vec<String>>,
}

/// A regex search over files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrepInvocation {
    pub pattern: String,
    pub file_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matches: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_count: Option<u32>,
}

/// A search-and-replace edit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchReplace {
    pub file_path: String,
    pub old_string: String,
    pub new_string: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacements: Option<u32>,
}

/// A git checkpoint recorded by the agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checkpoint {
    pub branch: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch: Option<String>,
}

/// An MCP tool call made by the agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct McpToolInvocation {
    pub tool_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// A generic tool call that does not fit a more specific payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericTool {
    pub tool_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// One entry of an agent todo list attached to a message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: String,
    pub content: String,
    pub status: String,
    pub priority: String,
}

/// An image attached to a message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAttachment {
    pub file_name: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_id: Option<String>,
}

/// Borrowed view of the zero-or-one tool payload a message carries.
#[derive(Debug, Clone, Copy)]
pub enum ToolInvocation<'a> {
    Bash(&'a BashInvocation),
    Edit(&'a FileEdit),
    Read(&'a FileRead),
    WebSearch(&'a WebSearch),
    CodebaseSearch(&'a CodebaseSearch),
    Grep(&'a GrepInvocation),
    SearchReplace(&'a SearchReplace),
    Checkpoint(&'a Checkpoint),
    Mcp(&'a McpToolInvocation),
    Tool(&'a GenericTool),
}

impl ToolInvocation<'_> {
    /// Short label for list rendering.
    pub fn label(&self) -> &'static str {
        match self {
            ToolInvocation::Bash(_) => "bash",
            ToolInvocation::Edit(_) => "edit",
            ToolInvocation::Read(_) => "read",
            ToolInvocation::WebSearch(_) => "web_search",
            ToolInvocation::CodebaseSearch(_) => "codebase_search",
            ToolInvocation::Grep(_) => "grep",
            ToolInvocation::SearchReplace(_) => "search_replace",
            ToolInvocation::Checkpoint(_) => "checkpoint",
            ToolInvocation::Mcp(_) => "mcp",
            ToolInvocation::Tool(_) => "tool",
        }
    }
}

/// A conversation message as returned by `GET /admin/messages`.
///
/// The backend stores at most one tool payload per message; the optional
/// fields mirror the wire shape and [`Message::tool_invocation`] exposes
/// whichever one is present.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_creationTime")]
    pub creation_time: f64,
    pub session_id: String,
    pub role: MessageRole,
    pub content: String,

    // Tool payloads -- at most one is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bash: Option<BashInvocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edits: Option<FileEdit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read: Option<FileRead>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_search: Option<WebSearch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codebase_search: Option<CodebaseSearch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grep: Option<GrepInvocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_replace: Option<SearchReplace>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkpoint: Option<Checkpoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mcp_tool: Option<McpToolInvocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool: Option<GenericTool>,

    // Non-tool attachments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub todos: Option<Vec<TodoItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageAttachment>,

    // Usage metrics.
    #[serde(rename = "costUSD", default, skip_serializing_if = "Option::is_none")]
    pub cost_usd: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_used: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_tokens: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_tokens: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_read_tokens: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_creation_tokens: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<f64>,
}

impl Message {
    /// The tool payload attached to this message, if any.
    pub fn tool_invocation(&self) -> Option<ToolInvocation<'_>> {
        if let Some(b) = &self.bash {
            Some(ToolInvocation::Bash(b))
        } else if let Some(e) = &self.edits {
            Some(ToolInvocation::Edit(e))
        } else if let Some(r) = &self.read {
            Some(ToolInvocation::Read(r))
        } else if let Some(w) = &self.web_search {
            Some(ToolInvocation::WebSearch(w))
        } else if let Some(c) = &self.codebase_search {
            Some(ToolInvocation::CodebaseSearch(c))
        } else if let Some(g) = &self.grep {
            Some(ToolInvocation::Grep(g))
        } else if let Some(s) = &self.search_replace {
            Some(ToolInvocation::SearchReplace(s))
        } else if let Some(c) = &self.checkpoint {
            Some(ToolInvocation::Checkpoint(c))
        } else if let Some(m) = &self.mcp_tool {
            Some(ToolInvocation::Mcp(m))
        } else if let Some(t) = &self.tool {
            Some(ToolInvocation::Tool(t))
        } else {
            None
        }
    }

    /// Whether the message carries any visible text.
    pub fn has_content(&self) -> bool {
        !self.content.trim().is_empty()
    }
}

impl CreationStamped for Message {
    fn creation_time(&self) -> f64 {
        self.creation_time
    }
}
