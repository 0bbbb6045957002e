#[cfg(test)]
mod tests {

    mod normalize_tests {
        use crate::models::FormSubmission;
        use crate::services::normalize::{
            clamp_strings, decode_string_list, form_links, unique_strings,
        };

        fn strings(values: &[&str]) -> Vec<String> {
            values.iter().map(|v| v.to_string()).collect()
        }

        #[test]
        fn test_clamp_drops_tail() {
            let values = strings(&["a", "b", "c", "d"]);
            assert_eq!(clamp_strings(values, 2), strings(&["a", "b"]));
        }

        #[test]
        fn test_clamp_shorter_than_max() {
            let values = strings(&["a"]);
            assert_eq!(clamp_strings(values, 5), strings(&["a"]));
        }

        #[test]
        fn test_unique_keeps_first_occurrence() {
            let values = strings(&["x", "", "y", "x", "z", "y"]);
            assert_eq!(unique_strings(values), strings(&["x", "y", "z"]));
        }

        #[test]
        fn test_form_links_repeated_field_then_numbered() {
            let mut form = FormSubmission::new();
            for i in 1..=8 {
                form.push_field("links", format!("https://l{}.example", i));
            }
            for i in 1..=5 {
                form.push_field(format!("link{}", i), format!("https://n{}.example", i));
            }

            let links = form_links(&form);
            assert_eq!(
                links,
                strings(&[
                    "https://l1.example",
                    "https://l2.example",
                    "https://l3.example",
                    "https://l4.example",
                    "https://l5.example",
                ])
            );
        }

        #[test]
        fn test_form_links_trim_and_dedup() {
            let form = FormSubmission::new()
                .with_field("links", "  https://a.example ")
                .with_field("links", "   ")
                .with_field("link1", "https://a.example")
                .with_field("link3", "https://b.example");

            assert_eq!(
                form_links(&form),
                strings(&["https://a.example", "https://b.example"])
            );
        }

        #[test]
        fn test_form_links_empty_form() {
            assert!(form_links(&FormSubmission::new()).is_empty());
        }

        #[test]
        fn test_decode_string_list() {
            assert_eq!(decode_string_list(r#"["/a.png","/b.png"]"#), strings(&["/a.png", "/b.png"]));
            assert!(decode_string_list("").is_empty());
            assert!(decode_string_list("null").is_empty());
            assert!(decode_string_list("{not json").is_empty());
            assert!(decode_string_list(r#"[1, 2]"#).is_empty());
        }
    }

    mod draft_tests {
        use crate::models::{EntityKind, EntryPayload, FormSubmission};
        use crate::services::drafts;
        use crate::services::uploads::UploadStore;

        fn payload(json: &str) -> EntryPayload {
            serde_json::from_str(json).unwrap()
        }

        fn store() -> (tempfile::TempDir, UploadStore) {
            let dir = tempfile::tempdir().unwrap();
            let store = UploadStore::new(dir.path(), "img/uploads");
            (dir, store)
        }

        #[test]
        fn test_payload_keeps_duplicate_images_but_not_links() {
            let draft = drafts::from_payload(
                EntityKind::Blog,
                payload(
                    r#"{"title":"T","description":"D","images":["/a.png","/b.png","/a.png"],"links":["x","x","y"]}"#,
                ),
            );
            assert_eq!(draft.images, vec!["/a.png", "/b.png", "/a.png"]);
            assert_eq!(draft.links, vec!["x", "y"]);
            assert_eq!(draft.img(), "/a.png");
        }

        #[test]
        fn test_payload_caps_lists() {
            let images: Vec<String> = (0..15).map(|i| format!("/{}.png", i)).collect();
            let links: Vec<String> = (0..9).map(|i| format!("https://{}.example", i)).collect();
            let json = serde_json::json!({ "images": images, "links": links }).to_string();

            let draft = drafts::from_payload(EntityKind::Project, payload(&json));
            assert_eq!(draft.images.len(), 10);
            assert_eq!(draft.links.len(), 5);
            assert_eq!(draft.links[0], "https://0.example");
        }

        #[test]
        fn test_payload_nulls_and_missing_fields() {
            let draft = drafts::from_payload(
                EntityKind::Blog,
                payload(r#"{"title":null,"images":null}"#),
            );
            assert_eq!(draft.title, "");
            assert!(draft.images.is_empty());
            assert_eq!(draft.img(), "");
        }

        #[test]
        fn test_payload_led_ignores_links() {
            let draft = drafts::from_payload(
                EntityKind::Led,
                payload(r#"{"location":"Tashkent","links":["x"]}"#),
            );
            assert_eq!(draft.location, "Tashkent");
            assert!(draft.links.is_empty());
        }

        #[test]
        fn test_payload_blog_ignores_location() {
            let draft = drafts::from_payload(EntityKind::Blog, payload(r#"{"location":"x"}"#));
            assert_eq!(draft.location, "");
        }

        #[test]
        fn test_create_stores_at_most_ten_files() {
            let (dir, uploads) = store();
            let mut form = FormSubmission::new().with_field("title", "Screens");
            for i in 0..12 {
                form = form.with_file("imgs", &format!("{}.png", i), b"png");
            }

            let draft = drafts::for_create(EntityKind::Led, &form, &uploads);
            assert_eq!(draft.images.len(), 10);
            assert!(draft.images.iter().all(|p| p.starts_with("/img/uploads/")));
            assert!(draft.images[0].ends_with("_0.png"));
            assert_eq!(draft.title, "Screens");

            let written = std::fs::read_dir(dir.path().join("img/uploads")).unwrap().count();
            assert_eq!(written, 10);
        }

        #[test]
        fn test_create_falls_back_to_legacy_img() {
            let (_dir, uploads) = store();
            let form = FormSubmission::new().with_file("img", "cover.jpg", b"jpg");

            let draft = drafts::for_create(EntityKind::Blog, &form, &uploads);
            assert_eq!(draft.images.len(), 1);
            assert!(draft.img().ends_with("_cover.jpg"));
        }

        #[test]
        fn test_create_ignores_legacy_img_when_imgs_present() {
            let (dir, uploads) = store();
            let form = FormSubmission::new()
                .with_file("imgs", "a.png", b"a")
                .with_file("img", "cover.jpg", b"jpg");

            let draft = drafts::for_create(EntityKind::Blog, &form, &uploads);
            assert_eq!(draft.images.len(), 1);
            assert!(draft.img().ends_with("_a.png"));
            let written = std::fs::read_dir(dir.path().join("img/uploads")).unwrap().count();
            assert_eq!(written, 1);
        }

        #[test]
        fn test_update_prefers_images_old() {
            let (_dir, uploads) = store();
            let form = FormSubmission::new()
                .with_field("imagesOld", r#"["/kept.png"]"#)
                .with_file("imgs", "new.png", b"n");

            let draft = drafts::for_update(EntityKind::Project, &form, &uploads, || {
                panic!("stored images should not be read")
            })
            .unwrap();
            assert_eq!(draft.images.len(), 2);
            assert_eq!(draft.images[0], "/kept.png");
            assert!(draft.images[1].ends_with("_new.png"));
        }

        #[test]
        fn test_update_falls_back_to_current_images() {
            let (_dir, uploads) = store();
            let form = FormSubmission::new().with_field("imagesOld", "not json");

            let draft = drafts::for_update(EntityKind::Blog, &form, &uploads, || {
                Ok(vec!["/stored.png".to_string()])
            })
            .unwrap();
            assert_eq!(draft.images, vec!["/stored.png"]);
        }

        #[test]
        fn test_update_prepends_replacement_and_clamps() {
            let (_dir, uploads) = store();
            let old: Vec<String> = (0..10).map(|i| format!("/old{}.png", i)).collect();
            let form = FormSubmission::new()
                .with_field("imagesOld", &serde_json::to_string(&old).unwrap())
                .with_file("img", "cover.png", b"c");

            let draft =
                drafts::for_update(EntityKind::Led, &form, &uploads, || Ok(Vec::new())).unwrap();
            assert_eq!(draft.images.len(), 10);
            assert!(draft.img().ends_with("_cover.png"));
            assert_eq!(draft.images[9], "/old8.png");
        }

        #[test]
        fn test_update_propagates_read_failure() {
            let (_dir, uploads) = store();
            let result = drafts::for_update(EntityKind::Blog, &FormSubmission::new(), &uploads, || {
                Err(anyhow::anyhow!("database is locked"))
            });
            assert!(result.is_err());
        }
    }

    mod upload_tests {
        use crate::services::uploads::UploadStore;

        #[test]
        fn test_save_returns_public_path() {
            let dir = tempfile::tempdir().unwrap();
            let uploads = UploadStore::new(dir.path(), "/img/uploads/");

            let url = uploads.save("photo.jpg", b"bytes").unwrap();
            assert!(url.starts_with("/img/uploads/"));
            assert!(url.ends_with("_photo.jpg"));

            let filename = url.rsplit('/').next().unwrap();
            let on_disk = std::fs::read(dir.path().join("img/uploads").join(filename)).unwrap();
            assert_eq!(on_disk, b"bytes");
        }

        #[test]
        fn test_same_name_twice_gives_two_files() {
            let dir = tempfile::tempdir().unwrap();
            let uploads = UploadStore::new(dir.path(), "img/uploads");

            let first = uploads.save("a.png", b"1").unwrap();
            let second = uploads.save("a.png", b"2").unwrap();
            assert_ne!(first, second);
            assert_eq!(std::fs::read_dir(uploads.dir()).unwrap().count(), 2);
        }
    }

    mod model_tests {
        use crate::models::{
            ContactRequest, EntityKind, EntryDraft, Language, TargetLang, TranslateRequest,
            TranslateResponse,
        };

        #[test]
        fn test_entity_kind_tables() {
            assert_eq!(EntityKind::Blog.table(), "blog");
            assert_eq!(EntityKind::Project.table(), "projects");
            assert_eq!(EntityKind::Led.api_path(), "/api/led");
            assert_eq!("projects".parse::<EntityKind>(), Ok(EntityKind::Project));
            assert!("posts".parse::<EntityKind>().is_err());
        }

        #[test]
        fn test_target_lang_parse() {
            assert_eq!("uz".parse::<TargetLang>(), Ok(TargetLang::One(Language::Uz)));
            assert_eq!("en".parse::<TargetLang>(), Ok(TargetLang::One(Language::En)));
            assert_eq!("all".parse::<TargetLang>(), Ok(TargetLang::All));
            assert!("ru".parse::<TargetLang>().is_err());
            assert!("EN".parse::<TargetLang>().is_err());
        }

        #[test]
        fn test_contact_message() {
            let request = ContactRequest {
                name: "Aziz".into(),
                phone: "+998 90 000 00 00".into(),
                description: "LED screen for a shop".into(),
            };
            assert_eq!(
                request.message(),
                "Новая заявка!\nИмя: Aziz\nТелефон: +998 90 000 00 00\nОписание: LED screen for a shop"
            );
        }

        #[test]
        fn test_contact_request_null_fields_are_empty() {
            let request: ContactRequest =
                serde_json::from_str(r#"{"name":"A","phone":null}"#).unwrap();
            assert_eq!(request.name, "A");
            assert_eq!(request.phone, "");
            assert_eq!(request.description, "");
        }

        #[test]
        fn test_translate_request_null_fields_are_empty() {
            let request: TranslateRequest =
                serde_json::from_str(r#"{"text":null,"lang":"en"}"#).unwrap();
            assert_eq!(request.text, "");
            assert_eq!(request.lang, "en");

            let request: TranslateRequest = serde_json::from_str(r#"{"text":"hi"}"#).unwrap();
            assert_eq!(request.lang, "");
        }

        #[test]
        fn test_blog_entry_json_has_links_not_location() {
            let draft = EntryDraft {
                title: "T".into(),
                images: vec!["/a.png".into()],
                links: vec!["https://a.example".into()],
                ..Default::default()
            };
            let value = serde_json::to_value(draft.into_entry(EntityKind::Blog, 3)).unwrap();
            assert_eq!(value["id"], 3);
            assert_eq!(value["img"], "/a.png");
            assert_eq!(value["links"][0], "https://a.example");
            assert_eq!(value["title_uz"], "");
            assert!(value.get("location").is_none());
        }

        #[test]
        fn test_led_entry_json_has_location_not_links() {
            let draft = EntryDraft {
                location: "Samarkand".into(),
                ..Default::default()
            };
            let value = serde_json::to_value(draft.into_entry(EntityKind::Led, 1)).unwrap();
            assert_eq!(value["location"], "Samarkand");
            assert_eq!(value["img"], "");
            assert_eq!(value["images"], serde_json::json!([]));
            assert!(value.get("links").is_none());
        }

        #[test]
        fn test_without_translations_blanks_localized_fields() {
            let draft = EntryDraft {
                title: "T".into(),
                title_uz: "Tuz".into(),
                description_en: "Den".into(),
                ..Default::default()
            };
            let entry = draft.into_entry(EntityKind::Project, 1).without_translations();
            assert_eq!(entry.title, "T");
            assert_eq!(entry.title_uz, "");
            assert_eq!(entry.description_en, "");
        }

        #[test]
        fn test_translate_response_omits_empty_parts() {
            let response = TranslateResponse {
                original: "hello".into(),
                lang: "all".into(),
                ..Default::default()
            };
            assert_eq!(
                serde_json::to_value(&response).unwrap(),
                serde_json::json!({ "original": "hello", "lang": "all" })
            );
        }
    }

    mod translate_tests {
        use crate::services::translate::extract_translation;
        use serde_json::json;

        #[test]
        fn test_extract_single_segment() {
            let body = json!([[["Hello", "Привет", null, null, 1]], null, "ru"]);
            assert_eq!(extract_translation(&body), Some("Hello".to_string()));
        }

        #[test]
        fn test_extract_joins_segments() {
            let body = json!([[["Hello. ", "Привет. "], ["How are you?", "Как дела?"]], null, "ru"]);
            assert_eq!(
                extract_translation(&body),
                Some("Hello. How are you?".to_string())
            );
        }

        #[test]
        fn test_extract_unexpected_shape() {
            assert_eq!(extract_translation(&json!({})), None);
            assert_eq!(extract_translation(&json!([null])), None);
            assert_eq!(extract_translation(&json!([[]])), None);
        }
    }

    mod config_tests {
        use crate::config::{parse_size, Config};

        #[test]
        fn test_parse_size() {
            assert_eq!(parse_size("10MB").unwrap(), 10 * 1024 * 1024);
            assert_eq!(parse_size("512kb").unwrap(), 512 * 1024);
            assert_eq!(parse_size("1GB").unwrap(), 1024 * 1024 * 1024);
            assert_eq!(parse_size("2048").unwrap(), 2048);
            assert!(parse_size("lots").is_err());
        }

        #[test]
        fn test_defaults() {
            let config = Config::default();
            assert_eq!(config.server.port, 9090);
            assert_eq!(config.database.path, "influence.db");
            assert_eq!(config.media.upload_dir, "img/uploads");
            assert_eq!(config.translate.source_lang, "ru");
            assert!(config.telegram.bot_token.is_none());
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_partial_file_keeps_defaults() {
            let config: Config = toml::from_str(
                r#"
                [server]
                port = 8080

                [telegram]
                bot_token = "123:abc"
                "#,
            )
            .unwrap();
            assert_eq!(config.server.port, 8080);
            assert_eq!(config.server.host, "0.0.0.0");
            assert_eq!(config.telegram.bot_token.as_deref(), Some("123:abc"));
            assert_eq!(config.telegram.api_base, "https://api.telegram.org");
        }

        #[test]
        fn test_invalid_upload_size_rejected() {
            let mut config = Config::default();
            config.media.max_upload_size = "huge".into();
            assert!(config.validate().is_err());
        }
    }

    mod error_tests {
        use crate::web::AppError;
        use axum::http::StatusCode;
        use axum::response::IntoResponse;

        fn response_status(err: AppError) -> StatusCode {
            err.into_response().status()
        }

        #[test]
        fn test_status_mapping() {
            assert_eq!(response_status(AppError::bad_request("Invalid JSON")), StatusCode::BAD_REQUEST);
            assert_eq!(response_status(AppError::NotFound), StatusCode::NOT_FOUND);
            assert_eq!(response_status(AppError::MethodNotAllowed), StatusCode::METHOD_NOT_ALLOWED);
            assert_eq!(
                response_status(AppError::Database(anyhow::anyhow!("disk I/O error"))),
                StatusCode::INTERNAL_SERVER_ERROR
            );
            assert_eq!(
                response_status(AppError::upstream("Translation failed", anyhow::anyhow!("timeout"))),
                StatusCode::INTERNAL_SERVER_ERROR
            );
        }

        #[test]
        fn test_internal_details_not_exposed() {
            let err = AppError::Database(anyhow::anyhow!("no such table: blog"));
            assert_eq!(err.to_string(), "DB error");
            let err = AppError::upstream("Failed to send to Telegram", anyhow::anyhow!("dns error"));
            assert_eq!(err.to_string(), "Failed to send to Telegram");
        }
    }
}
