use super::*;
use crate::plan::UNKNOWN_TITLE;

const DISC: &str = "lwHl8fGzJyLXQR33ug60E8jhf4k-";

fn sample_response() -> String {
    format!(
        r#"{{
  "id": "{DISC}",
  "sectors": 215353,
  "releases": [
    {{
      "id": "r-other",
      "title": "Some Other Release",
      "media": [
        {{
          "position": 1,
          "discs": [{{ "id": "someone-else-", "sectors": 1 }}],
          "tracks": [
            {{ "position": 1, "title": "Wrong", "recording": {{ "artist-credit": [] }} }}
          ]
        }}
      ]
    }},
    {{
      "id": "r-match",
      "title": "Techno Sessions",
      "media": [
        {{
          "position": 1,
          "discs": [],
          "tracks": []
        }},
        {{
          "position": 2,
          "discs": [{{ "id": "{DISC}", "sectors": 215353 }}],
          "tracks": [
            {{
              "position": 1,
              "number": "1",
              "title": "Intro",
              "recording": {{
                "id": "rec-1",
                "artist-credit": [{{ "name": "DJ X", "joinphrase": "" }}]
              }}
            }},
            {{
              "position": 2,
              "title": "Groove",
              "recording": {{
                "artist-credit": [
                  {{ "name": "A", "joinphrase": " & " }},
                  {{ "name": "B", "joinphrase": "" }}
                ]
              }}
            }},
            {{ "position": 3 }},
            {{ "title": "No Position", "recording": {{}} }}
          ]
        }}
      ]
    }}
  ]
}}"#
    )
}

#[test]
fn tracks_come_from_the_medium_holding_the_disc() {
    let response = parse_response(&sample_response()).unwrap();
    let tracks = tracks_for_disc(&response, DISC).unwrap();

    assert_eq!(tracks.len(), 4);
    assert_eq!(tracks[0].number, 1);
    assert_eq!(tracks[0].title, "Intro");
    assert_eq!(tracks[0].artists, vec!["DJ X".to_string()]);
    assert_eq!(tracks[1].artists, vec!["A".to_string(), "B".to_string()]);
    assert_eq!(tracks[1].artist_display(), "A, B");
}

#[test]
fn missing_track_fields_use_defaults() {
    let response = parse_response(&sample_response()).unwrap();
    let tracks = tracks_for_disc(&response, DISC).unwrap();

    assert_eq!(tracks[2].number, 3);
    assert_eq!(tracks[2].title, UNKNOWN_TITLE);
    assert!(tracks[2].artists.is_empty());

    assert_eq!(tracks[3].number, 0);
    assert_eq!(tracks[3].title, "No Position");
    assert!(tracks[3].artists.is_empty());
}

#[test]
fn unknown_disc_id_is_not_found() {
    let response = parse_response(&sample_response()).unwrap();
    let err = tracks_for_disc(&response, "nope-").unwrap_err();
    assert!(matches!(err, MetadataError::DiscNotFound(ref id) if id == "nope-"));
}

#[test]
fn empty_release_list_is_not_found() {
    let response = parse_response(r#"{"releases": []}"#).unwrap();
    assert!(matches!(
        tracks_for_disc(&response, DISC),
        Err(MetadataError::DiscNotFound(_))
    ));
}

#[test]
fn missing_structure_is_malformed() {
    let cases = [
        (r#"{"id": "x"}"#, "releases"),
        (r#"{"releases": [{"id": "r"}]}"#, "media"),
        (r#"{"releases": [{"media": [{"tracks": []}]}]}"#, "discs"),
    ];
    for (body, missing) in cases {
        let response = parse_response(body).unwrap();
        match tracks_for_disc(&response, DISC) {
            Err(MetadataError::Malformed(what)) => assert_eq!(what, missing),
            other => panic!("expected malformed {missing}, got {other:?}"),
        }
    }
}

#[test]
fn invalid_json_is_a_parse_error() {
    let err = parse_response("<html>502</html>").unwrap_err();
    assert!(matches!(err, MetadataError::Parse(_)));
    assert!(err.to_string().starts_with("musicbrainz response parse failed"));
}
