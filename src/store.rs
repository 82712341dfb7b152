use std::path::{Path, PathBuf};

use tokio::{fs, io::AsyncWriteExt};

use crate::{Result, SEQUENCE_WIDTH, TIER_COUNT};

/// Makes sure `{root}/1` .. `{root}/5` exist. Safe to call again on an existing tree.
pub async fn create_directories(root: &Path) -> Result<()> {
    for tier in 1..=TIER_COUNT {
        fs::create_dir_all(root.join(tier.to_string())).await?;
    }
    Ok(())
}

/// `{root}/{tier}/{sequence:04}.txt`
pub fn review_path(root: &Path, tier: usize, sequence: usize) -> PathBuf {
    root.join(tier.to_string())
        .join(format!("{sequence:0width$}.txt", width = SEQUENCE_WIDTH))
}

/// Writes the title on the first line and the review body after it.
/// An existing file at the same path is replaced.
pub async fn write_review(
    root: &Path,
    tier: usize,
    sequence: usize,
    title: &str,
    body: &str,
) -> Result<PathBuf> {
    let path = review_path(root, tier, sequence);
    let mut file = fs::File::create(&path).await?;
    file.write_all(format!("{}\n{}", title.trim(), body.trim()).as_bytes())
        .await?;
    file.flush().await?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn creates_all_tiers_and_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("data");
        create_directories(&root).await.unwrap();
        create_directories(&root).await.unwrap();
        for tier in 1..=5 {
            assert!(root.join(tier.to_string()).is_dir());
        }
        assert!(!root.join("0").exists());
        assert!(!root.join("6").exists());
    }

    #[tokio::test]
    async fn directory_creation_fails_under_a_file() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("data");
        std::fs::write(&blocker, "not a dir").unwrap();
        assert!(create_directories(&blocker).await.is_err());
    }

    #[test]
    fn sequence_is_zero_padded() {
        let root = Path::new("data");
        assert_eq!(review_path(root, 5, 1), Path::new("data/5/0001.txt"));
        assert_eq!(review_path(root, 2, 42), Path::new("data/2/0042.txt"));
        assert_eq!(review_path(root, 1, 9999), Path::new("data/1/9999.txt"));
    }

    #[tokio::test]
    async fn write_overwrites_existing_file() {
        let tmp = TempDir::new().unwrap();
        create_directories(tmp.path()).await.unwrap();
        write_review(tmp.path(), 5, 1, "Old", "old body").await.unwrap();
        let path = write_review(tmp.path(), 5, 1, " New title ", "\n new body\nline two \n")
            .await
            .unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        assert_eq!(content, "New title\nnew body\nline two");
    }
}
