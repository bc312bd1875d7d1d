//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum shared by every layer of the client.
//! Server-originated failures map onto HTTP status codes; client-side
//! connectivity failures use the pseudo status `0`.

use serde::Serialize;

/// エラー種別の列挙体
///
/// API 境界で観測されたエラーを分類します。
/// サーバー応答のないエラー（接続失敗・タイムアウト）は
/// [`ErrorKind::NetworkUnavailable`] として扱い、ステータスコード `0` を返します。
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::from_status(401);
/// assert_eq!(kind, ErrorKind::Unauthorized);
/// assert_eq!(kind.as_str(), "Unauthorized");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 0 - サーバーに到達できない（接続失敗・タイムアウト）
    NetworkUnavailable,
    /// 400 - Bad Request: 入力値が不正
    BadRequest,
    /// 401 - Unauthorized: 認証情報が無効・期限切れ
    Unauthorized,
    /// 403 - Forbidden: アクセス権限なし
    Forbidden,
    /// 404 - Not Found
    NotFound,
    /// 408 - Request Timeout
    RequestTimeout,
    /// 409 - Conflict: 既に登録済みなど
    Conflict,
    /// 422 - Unprocessable Entity
    UnprocessableEntity,
    /// 429 - Too Many Requests
    TooManyRequests,
    /// 500 - Internal Server Error（クライアント内部エラーも含む）
    InternalServerError,
    /// 503 - Service Unavailable
    ServiceUnavailable,
}

impl ErrorKind {
    /// ステータスコードを取得
    ///
    /// `NetworkUnavailable` は応答が存在しないため `0` を返します。
    #[inline]
    pub const fn status_code(&self) -> u16 {
        match self {
            ErrorKind::NetworkUnavailable => 0,
            ErrorKind::BadRequest => 400,
            ErrorKind::Unauthorized => 401,
            ErrorKind::Forbidden => 403,
            ErrorKind::NotFound => 404,
            ErrorKind::RequestTimeout => 408,
            ErrorKind::Conflict => 409,
            ErrorKind::UnprocessableEntity => 422,
            ErrorKind::TooManyRequests => 429,
            ErrorKind::InternalServerError => 500,
            ErrorKind::ServiceUnavailable => 503,
        }
    }

    /// 受信したステータスコードから種別を推定
    ///
    /// 未知の 4xx は `BadRequest`、未知の 5xx は `InternalServerError` に丸めます。
    pub const fn from_status(status: u16) -> Self {
        match status {
            0 => ErrorKind::NetworkUnavailable,
            401 => ErrorKind::Unauthorized,
            403 => ErrorKind::Forbidden,
            404 => ErrorKind::NotFound,
            408 => ErrorKind::RequestTimeout,
            409 => ErrorKind::Conflict,
            422 => ErrorKind::UnprocessableEntity,
            429 => ErrorKind::TooManyRequests,
            503 => ErrorKind::ServiceUnavailable,
            400..=499 => ErrorKind::BadRequest,
            _ => ErrorKind::InternalServerError,
        }
    }

    /// ユーザー向けの文字列表現を取得
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NetworkUnavailable => "Network Unavailable",
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::Forbidden => "Forbidden",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::RequestTimeout => "Request Timeout",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::UnprocessableEntity => "Unprocessable Entity",
            ErrorKind::TooManyRequests => "Too Many Requests",
            ErrorKind::InternalServerError => "Internal Server Error",
            ErrorKind::ServiceUnavailable => "Service Unavailable",
        }
    }

    /// 再試行で解消し得るエラーかどうか
    ///
    /// 接続失敗・タイムアウト・一時的なサーバー障害が該当します。
    #[inline]
    pub const fn is_transient(&self) -> bool {
        matches!(
            self,
            ErrorKind::NetworkUnavailable
                | ErrorKind::RequestTimeout
                | ErrorKind::TooManyRequests
                | ErrorKind::ServiceUnavailable
        )
    }

    /// サーバー側のエラーかどうか (5xx)
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }

    /// クライアント側のエラーかどうか (4xx)
    #[inline]
    pub const fn is_client_error(&self) -> bool {
        let code = self.status_code();
        code >= 400 && code < 500
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
