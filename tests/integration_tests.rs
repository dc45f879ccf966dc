use std::fs;
use std::path::{Path, PathBuf};

use courtside_sentiment::analysis::aggregate::{
    mean_sentiment_by_gender, sentiment_category_counts, topic_mention_counts_by_gender,
    topic_mention_counts_by_player,
};
use courtside_sentiment::analysis::summary::build_summary;
use courtside_sentiment::config::PipelineConfig;
use courtside_sentiment::output::read_aggregated;
use courtside_sentiment::pipeline;
use courtside_sentiment::records::{Gender, SentimentCategory, TaggedRecord, Topic};

fn fixture(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    path
}

fn fixture_config(out_dir: &Path) -> PipelineConfig {
    PipelineConfig {
        men: fixture("top_10_men_players.csv"),
        women: fixture("top_10_women_players.csv"),
        output: out_dir.join("data").join("aggregated_data.csv"),
        summary: Some(out_dir.join("data").join("summary.json")),
    }
}

fn sorted(mut records: Vec<TaggedRecord>) -> Vec<TaggedRecord> {
    records.sort_by(|a, b| {
        (a.gender(), a.player_name(), a.tweet().tweet_index)
            .cmp(&(b.gender(), b.player_name(), b.tweet().tweet_index))
    });
    records
}

#[test]
fn test_end_to_end_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let men = dir.path().join("men.csv");
    let women = dir.path().join("women.csv");
    fs::write(
        &men,
        "Player Name,Position,Tweet 1,Tweet 2\nMark Sears,Guard,He is a great scorer,\n",
    )
    .unwrap();
    fs::write(
        &women,
        "Player Name,Position,Tweet 1\nPaige Bueckers,Guard,She looks beautiful today\n",
    )
    .unwrap();

    let config = PipelineConfig {
        men,
        women,
        output: dir.path().join("aggregated_data.csv"),
        summary: None,
    };
    let result = pipeline::run(&config).unwrap();
    assert_eq!(result.records.len(), 3);

    let content = fs::read_to_string(&config.output).unwrap();
    let lines: Vec<_> = content.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[0],
        "Player Name,Position,Gender,Tweet #,Tweet Text,Sentiment Score,Sentiment Category,Topic_Performance,Topic_Appearance,Topic_Age"
    );
    assert_eq!(
        lines[1],
        "Mark Sears,Guard,Men,1,He is a great scorer,0.6249,Positive,1,0,0"
    );
    assert_eq!(lines[2], "Mark Sears,Guard,Men,2,,0.0,Neutral,0,0,0");
    assert_eq!(
        lines[3],
        "Paige Bueckers,Guard,Women,1,She looks beautiful today,0.5994,Positive,0,1,0"
    );
}

#[test]
fn test_fixture_pipeline_counts() {
    let dir = tempfile::tempdir().unwrap();
    let config = fixture_config(dir.path());
    let result = pipeline::run(&config).unwrap();
    let records = &result.records;

    // 3 men x 3 tweets + 3 women x 4 tweets
    assert_eq!(records.len(), 21);
    assert_eq!(records.iter().filter(|r| r.gender() == Gender::Men).count(), 9);

    let nulls: Vec<_> = records
        .iter()
        .filter(|r| r.tweet().tweet_text.is_none())
        .collect();
    assert_eq!(nulls.len(), 2);
    for r in nulls {
        assert_eq!(r.sentiment_score(), 0.0);
        assert_eq!(r.sentiment_category(), SentimentCategory::Neutral);
        assert!(!r.topics.any());
    }

    let count = |topic, gender| {
        topic_mention_counts_by_gender(records, topic)
            .into_iter()
            .find(|row| row.gender == gender)
            .map(|row| row.count)
    };
    assert_eq!(count(Topic::Performance, Gender::Men), Some(4));
    assert_eq!(count(Topic::Performance, Gender::Women), Some(5));
    assert_eq!(count(Topic::Appearance, Gender::Men), Some(1));
    assert_eq!(count(Topic::Appearance, Gender::Women), Some(4));
    assert_eq!(count(Topic::Age, Gender::Men), Some(3));
    assert_eq!(count(Topic::Age, Gender::Women), Some(1));

    // "engaged" must not count as an age mention
    let engaged = records
        .iter()
        .find(|r| r.tweet().tweet_text.as_deref() == Some("She is engaged on every possession"))
        .unwrap();
    assert!(!engaged.mentions(Topic::Age));

    assert!(config.summary.as_ref().unwrap().exists());
}

#[test]
fn test_fixture_player_rankings() {
    let dir = tempfile::tempdir().unwrap();
    let result = pipeline::run(&fixture_config(dir.path())).unwrap();

    let appearance: Vec<_> = topic_mention_counts_by_player(&result.records, Topic::Appearance)
        .into_iter()
        .map(|row| (row.player_name, row.count))
        .collect();
    assert_eq!(
        appearance,
        vec![
            ("Lauren Betts".to_string(), 1),
            ("Mark Sears".to_string(), 1),
            ("Paige Bueckers".to_string(), 1),
            ("Hailey Van Lith".to_string(), 2),
        ]
    );

    let age: Vec<_> = topic_mention_counts_by_player(&result.records, Topic::Age)
        .into_iter()
        .map(|row| row.player_name)
        .collect();
    assert_eq!(
        age,
        vec!["Cooper Flagg", "Derik Queen", "Hailey Van Lith", "Mark Sears"]
    );
}

#[test]
fn test_export_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let config = fixture_config(dir.path());
    let result = pipeline::run(&config).unwrap();

    let reloaded = read_aggregated(&config.output).unwrap();
    assert_eq!(sorted(reloaded.clone()), sorted(result.records.clone()));

    // the exported file alone reproduces every aggregate
    assert_eq!(
        mean_sentiment_by_gender(&reloaded),
        mean_sentiment_by_gender(&result.records)
    );
    assert_eq!(
        sentiment_category_counts(&reloaded),
        sentiment_category_counts(&result.records)
    );
    let rebuilt = build_summary(&reloaded);
    assert_eq!(rebuilt.topics, result.summary.topics);
    assert_eq!(rebuilt.sentiment_gap, result.summary.sentiment_gap);
}

#[test]
fn test_rerun_overwrites_output() {
    let dir = tempfile::tempdir().unwrap();
    let config = fixture_config(dir.path());
    pipeline::run(&config).unwrap();
    let first = fs::read_to_string(&config.output).unwrap();
    pipeline::run(&config).unwrap();
    let second = fs::read_to_string(&config.output).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_bad_tweet_column_names_table() {
    let dir = tempfile::tempdir().unwrap();
    let women = dir.path().join("women.csv");
    fs::write(&women, "Player Name,Position,Tweet 1,Tweet Bonus\nA,Guard,x,y\n").unwrap();

    let config = PipelineConfig {
        men: fixture("top_10_men_players.csv"),
        women,
        output: dir.path().join("out.csv"),
        summary: None,
    };
    let err = pipeline::run(&config).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("women.csv"));
    assert!(message.contains("Tweet Bonus"));
    assert!(!config.output.exists());
}

#[test]
fn test_unwritable_output_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not_a_dir");
    fs::write(&blocker, "file in the way").unwrap();

    let mut config = fixture_config(dir.path());
    config.output = blocker.join("aggregated_data.csv");
    config.summary = None;

    assert!(pipeline::run(&config).is_err());
    assert!(!config.output.exists());
}
