use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{UnknownMessageError, CD_UNKNOWN_MESSAGE, MSG_UNKNOWN_MESSAGE};

/// The closed set of error/message identifiers reported by the backend.
///
/// Each entry carries a stable lowercase string code ("bad_credentials") used
/// as a lookup key by the localization layer and embedded into error responses.
/// The set is fixed at compile time; entries are never added at runtime.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    ApiKeyNotFound,
    BadCredentials,
    CanNotRevokeOwnPermissions,
    DataCorrupted,
    InvitationCodeDoesNotExistOrExpired,
    LanguageAbbreviationExists,
    LanguageNameExists,
    LanguageNotFound,
    OperationNotPermitted,
    PermissionNotFound,
    RegistrationsNotAllowed,
    RepositoryNotFound,
    ResourceNotFound,
    ScopeNotFound,
    KeyExists,
    KeyNotFromRepository,
    KeyTextIsRequired,
    ThirdPartyAuthErrorMessage,
    ThirdPartyAuthNoEmail,
    ThirdPartyAuthUnknownError,
    ThirdPartyUnauthorized,
    TranslationTextIsRequired,
    UsernameAlreadyExists,
    UsernameOrPasswordInvalid,
    UserAlreadyHasPermissions,
    UserNotFound,
    ValidationError,
    LanguageCanNotContainComma,
    FileNotImage,
    FileTooBig,
    InvalidTimestamp,
    EmailNotVerified,
    MissingCallbackUrl,
    InvalidJwtToken,
    ExpiredJwtToken,
    GeneralJwtError,
}

impl Message {
    /// All defined entries, in declaration order.
    pub const ALL: [Message; 36] = [
        Message::ApiKeyNotFound,
        Message::BadCredentials,
        Message::CanNotRevokeOwnPermissions,
        Message::DataCorrupted,
        Message::InvitationCodeDoesNotExistOrExpired,
        Message::LanguageAbbreviationExists,
        Message::LanguageNameExists,
        Message::LanguageNotFound,
        Message::OperationNotPermitted,
        Message::PermissionNotFound,
        Message::RegistrationsNotAllowed,
        Message::RepositoryNotFound,
        Message::ResourceNotFound,
        Message::ScopeNotFound,
        Message::KeyExists,
        Message::KeyNotFromRepository,
        Message::KeyTextIsRequired,
        Message::ThirdPartyAuthErrorMessage,
        Message::ThirdPartyAuthNoEmail,
        Message::ThirdPartyAuthUnknownError,
        Message::ThirdPartyUnauthorized,
        Message::TranslationTextIsRequired,
        Message::UsernameAlreadyExists,
        Message::UsernameOrPasswordInvalid,
        Message::UserAlreadyHasPermissions,
        Message::UserNotFound,
        Message::ValidationError,
        Message::LanguageCanNotContainComma,
        Message::FileNotImage,
        Message::FileTooBig,
        Message::InvalidTimestamp,
        Message::EmailNotVerified,
        Message::MissingCallbackUrl,
        Message::InvalidJwtToken,
        Message::ExpiredJwtToken,
        Message::GeneralJwtError,
    ];

    /// The stable symbolic name of the entry.
    pub const fn name(&self) -> &'static str {
        match self {
            Message::ApiKeyNotFound => "API_KEY_NOT_FOUND",
            Message::BadCredentials => "BAD_CREDENTIALS",
            Message::CanNotRevokeOwnPermissions => "CAN_NOT_REVOKE_OWN_PERMISSIONS",
            Message::DataCorrupted => "DATA_CORRUPTED",
            Message::InvitationCodeDoesNotExistOrExpired => "INVITATION_CODE_DOES_NOT_EXIST_OR_EXPIRED",
            Message::LanguageAbbreviationExists => "LANGUAGE_ABBREVIATION_EXISTS",
            Message::LanguageNameExists => "LANGUAGE_NAME_EXISTS",
            Message::LanguageNotFound => "LANGUAGE_NOT_FOUND",
            Message::OperationNotPermitted => "OPERATION_NOT_PERMITTED",
            Message::PermissionNotFound => "PERMISSION_NOT_FOUND",
            Message::RegistrationsNotAllowed => "REGISTRATIONS_NOT_ALLOWED",
            Message::RepositoryNotFound => "REPOSITORY_NOT_FOUND",
            Message::ResourceNotFound => "RESOURCE_NOT_FOUND",
            Message::ScopeNotFound => "SCOPE_NOT_FOUND",
            Message::KeyExists => "KEY_EXISTS",
            Message::KeyNotFromRepository => "KEY_NOT_FROM_REPOSITORY",
            Message::KeyTextIsRequired => "KEY_TEXT_IS_REQUIRED",
            Message::ThirdPartyAuthErrorMessage => "THIRD_PARTY_AUTH_ERROR_MESSAGE",
            Message::ThirdPartyAuthNoEmail => "THIRD_PARTY_AUTH_NO_EMAIL",
            Message::ThirdPartyAuthUnknownError => "THIRD_PARTY_AUTH_UNKNOWN_ERROR",
            Message::ThirdPartyUnauthorized => "THIRD_PARTY_UNAUTHORIZED",
            Message::TranslationTextIsRequired => "TRANSLATION_TEXT_IS_REQUIRED",
            Message::UsernameAlreadyExists => "USERNAME_ALREADY_EXISTS",
            Message::UsernameOrPasswordInvalid => "USERNAME_OR_PASSWORD_INVALID",
            Message::UserAlreadyHasPermissions => "USER_ALREADY_HAS_PERMISSIONS",
            Message::UserNotFound => "USER_NOT_FOUND",
            Message::ValidationError => "VALIDATION_ERROR",
            Message::LanguageCanNotContainComma => "LANGUAGE_CAN_NOT_CONTAIN_COMMA",
            Message::FileNotImage => "FILE_NOT_IMAGE",
            Message::FileTooBig => "FILE_TOO_BIG",
            Message::InvalidTimestamp => "INVALID_TIMESTAMP",
            Message::EmailNotVerified => "EMAIL_NOT_VERIFIED",
            Message::MissingCallbackUrl => "MISSING_CALLBACK_URL",
            Message::InvalidJwtToken => "INVALID_JWT_TOKEN",
            Message::ExpiredJwtToken => "EXPIRED_JWT_TOKEN",
            Message::GeneralJwtError => "GENERAL_JWT_ERROR",
        }
    }

    /// The lowercase string code of the entry (the symbolic name lowercased,
    /// underscores preserved). Must stay bit-for-bit stable: clients use it
    /// as a translation lookup key.
    pub const fn code(&self) -> &'static str {
        match self {
            Message::ApiKeyNotFound => "api_key_not_found",
            Message::BadCredentials => "bad_credentials",
            Message::CanNotRevokeOwnPermissions => "can_not_revoke_own_permissions",
            Message::DataCorrupted => "data_corrupted",
            Message::InvitationCodeDoesNotExistOrExpired => "invitation_code_does_not_exist_or_expired",
            Message::LanguageAbbreviationExists => "language_abbreviation_exists",
            Message::LanguageNameExists => "language_name_exists",
            Message::LanguageNotFound => "language_not_found",
            Message::OperationNotPermitted => "operation_not_permitted",
            Message::PermissionNotFound => "permission_not_found",
            Message::RegistrationsNotAllowed => "registrations_not_allowed",
            Message::RepositoryNotFound => "repository_not_found",
            Message::ResourceNotFound => "resource_not_found",
            Message::ScopeNotFound => "scope_not_found",
            Message::KeyExists => "key_exists",
            Message::KeyNotFromRepository => "key_not_from_repository",
            Message::KeyTextIsRequired => "key_text_is_required",
            Message::ThirdPartyAuthErrorMessage => "third_party_auth_error_message",
            Message::ThirdPartyAuthNoEmail => "third_party_auth_no_email",
            Message::ThirdPartyAuthUnknownError => "third_party_auth_unknown_error",
            Message::ThirdPartyUnauthorized => "third_party_unauthorized",
            Message::TranslationTextIsRequired => "translation_text_is_required",
            Message::UsernameAlreadyExists => "username_already_exists",
            Message::UsernameOrPasswordInvalid => "username_or_password_invalid",
            Message::UserAlreadyHasPermissions => "user_already_has_permissions",
            Message::UserNotFound => "user_not_found",
            Message::ValidationError => "validation_error",
            Message::LanguageCanNotContainComma => "language_can_not_contain_comma",
            Message::FileNotImage => "file_not_image",
            Message::FileTooBig => "file_too_big",
            Message::InvalidTimestamp => "invalid_timestamp",
            Message::EmailNotVerified => "email_not_verified",
            Message::MissingCallbackUrl => "missing_callback_url",
            Message::InvalidJwtToken => "invalid_jwt_token",
            Message::ExpiredJwtToken => "expired_jwt_token",
            Message::GeneralJwtError => "general_jwt_error",
        }
    }

    /// Find the entry with the given symbolic name.
    pub fn by_name(name: &str) -> Result<Message, UnknownMessageError> {
        let opt_message = Message::ALL.iter().find(|message| message.name() == name);
        match opt_message {
            Some(message) => Ok(*message),
            None => {
                log::error!("{CD_UNKNOWN_MESSAGE}: {MSG_UNKNOWN_MESSAGE} - \"{name}\"");
                Err(UnknownMessageError::new(name))
            }
        }
    }
}

impl FromStr for Message {
    type Err = UnknownMessageError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Message::by_name(name)
    }
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {

    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_code_is_lowercase_of_name() {
        for message in Message::ALL.iter() {
            assert_eq!(message.code(), message.name().to_lowercase());
        }
    }

    #[test]
    fn test_all_contains_36_entries() {
        assert_eq!(Message::ALL.len(), 36);
    }

    #[test]
    fn test_codes_are_unique() {
        let codes: HashSet<&str> = Message::ALL.iter().map(|message| message.code()).collect();

        assert_eq!(codes.len(), Message::ALL.len());
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<&str> = Message::ALL.iter().map(|message| message.name()).collect();

        assert_eq!(names.len(), Message::ALL.len());
    }

    #[test]
    fn test_all_matches_published_code_list() {
        // The contract surface consumed by client-side translation lookup.
        let expected = vec![
            "api_key_not_found",
            "bad_credentials",
            "can_not_revoke_own_permissions",
            "data_corrupted",
            "invitation_code_does_not_exist_or_expired",
            "language_abbreviation_exists",
            "language_name_exists",
            "language_not_found",
            "operation_not_permitted",
            "permission_not_found",
            "registrations_not_allowed",
            "repository_not_found",
            "resource_not_found",
            "scope_not_found",
            "key_exists",
            "key_not_from_repository",
            "key_text_is_required",
            "third_party_auth_error_message",
            "third_party_auth_no_email",
            "third_party_auth_unknown_error",
            "third_party_unauthorized",
            "translation_text_is_required",
            "username_already_exists",
            "username_or_password_invalid",
            "user_already_has_permissions",
            "user_not_found",
            "validation_error",
            "language_can_not_contain_comma",
            "file_not_image",
            "file_too_big",
            "invalid_timestamp",
            "email_not_verified",
            "missing_callback_url",
            "invalid_jwt_token",
            "expired_jwt_token",
            "general_jwt_error",
        ];

        let codes: Vec<&str> = Message::ALL.iter().map(|message| message.code()).collect();

        assert_eq!(codes, expected);
    }

    #[test]
    fn test_code_is_idempotent() {
        let code1 = Message::BadCredentials.code();
        let code2 = Message::BadCredentials.code();

        assert_eq!(code1, code2);
    }

    #[test]
    fn test_by_name_with_valid_name() {
        let message = Message::by_name("THIRD_PARTY_AUTH_NO_EMAIL").unwrap();

        assert_eq!(message, Message::ThirdPartyAuthNoEmail);
        assert_eq!(message.code(), "third_party_auth_no_email");
    }

    #[test]
    fn test_by_name_with_jwt_name() {
        let message = Message::by_name("GENERAL_JWT_ERROR").unwrap();

        assert_eq!(message, Message::GeneralJwtError);
        assert_eq!(message.code(), "general_jwt_error");
    }

    #[test]
    fn test_by_name_roundtrip_for_all_entries() {
        for message in Message::ALL.iter() {
            let found = Message::by_name(message.name()).unwrap();

            assert_eq!(found, *message);
        }
    }

    #[test]
    fn test_by_name_with_unknown_name() {
        let result = Message::by_name("NOT_A_REAL_CODE");

        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), UnknownMessageError::new("NOT_A_REAL_CODE"));
    }

    #[test]
    fn test_by_name_with_lowercase_code_is_rejected() {
        // Lookup is by symbolic name, not by code.
        let result = Message::by_name("bad_credentials");

        assert!(result.is_err());
    }

    #[test]
    fn test_from_str() {
        let message = "BAD_CREDENTIALS".parse::<Message>().unwrap();

        assert_eq!(message, Message::BadCredentials);
    }

    #[test]
    fn test_display_writes_code() {
        let text = Message::UsernameOrPasswordInvalid.to_string();

        assert_eq!(text, "username_or_password_invalid");
    }

    #[test]
    fn test_serialization_to_code() {
        let json = serde_json::to_string(&Message::BadCredentials).unwrap();

        assert_eq!(json, "\"bad_credentials\"");
    }

    #[test]
    fn test_deserialization_from_code() {
        let message: Message = serde_json::from_str("\"expired_jwt_token\"").unwrap();

        assert_eq!(message, Message::ExpiredJwtToken);
    }
}
