//! Static mock data set
//!
//! "Today" entries sit inside the default reference window (2024-01-16 UTC).

use crate::models::{Comment, Community, Hashtag, Post};
use chrono::{DateTime, TimeZone, Utc};

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

fn reference_day(hour: u32, minute: u32) -> DateTime<Utc> {
    at(2024, 1, 16, hour, minute)
}

fn community(id: &str, name: &str, description: &str, member_count: u32, color: &str) -> Community {
    Community {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        member_count,
        color: color.to_string(),
    }
}

fn hashtag(name: &str, search_count: u64, last_searched: DateTime<Utc>) -> Hashtag {
    Hashtag {
        name: name.to_string(),
        search_count,
        last_searched,
    }
}

fn post(
    id: &str,
    title: &str,
    content: &str,
    created_at: DateTime<Utc>,
    upvotes: i64,
    community_id: &str,
    hashtags: &[&str],
) -> Post {
    Post {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        created_at,
        updated_at: created_at,
        upvotes,
        community_id: community_id.to_string(),
        hashtags: hashtags.iter().map(|t| t.to_string()).collect(),
    }
}

fn comment(id: &str, post_id: &str, content: &str, created_at: DateTime<Utc>, upvotes: i64) -> Comment {
    Comment {
        id: id.to_string(),
        post_id: post_id.to_string(),
        content: content.to_string(),
        created_at,
        upvotes,
    }
}

pub fn communities() -> Vec<Community> {
    vec![
        community("1", "Web Development", "Everything about modern web development", 1247, "blue-500"),
        community("2", "React", "React ecosystem and best practices", 892, "cyan-500"),
        community("3", "TypeScript", "TypeScript tips, tricks, and discussions", 654, "blue-600"),
        community("4", "UI/UX Design", "User interface and experience design", 445, "purple-500"),
        community("5", "DevOps", "Development operations and deployment", 567, "green-500"),
        community("6", "JavaScript", "JavaScript language and ecosystem", 1103, "yellow-500"),
    ]
}

pub fn hashtags() -> Vec<Hashtag> {
    vec![
        hashtag("react", 156, reference_day(10, 30)),
        hashtag("typescript", 89, reference_day(9, 15)),
        hashtag("nextjs", 67, reference_day(8, 45)),
        hashtag("tailwind", 45, reference_day(7, 20)),
        hashtag("docker", 34, reference_day(6, 10)),
    ]
}

pub fn posts() -> Vec<Post> {
    vec![
        post(
            "1",
            "Welcome to Our Blog Community!",
            "Hey everyone!\n\n\
             I'm excited to share this new blog platform with you all. This is a place where we can \
             share ideas, have meaningful discussions, and learn from each other.\n\n\
             Feel free to upvote posts you enjoy and add your thoughts in the comments. Let's build \
             an amazing community together!\n\n\
             What topics would you like to see more of here?",
            at(2024, 1, 15, 10, 30),
            42,
            "1",
            &["welcome", "community", "discussion"],
        ),
        post(
            "2",
            "The Future of Web Development",
            "The web development landscape is evolving rapidly. Here are some trends I'm excited about:\n\n\
             Server Components in React: Game-changing for performance\n\
             Edge Computing: Bringing computation closer to users\n\
             CSS Container Queries: Responsive design just got better\n\
             Zero-Trust Security: Essential for modern applications\n\n\
             What emerging technologies are you most excited about? Let me know in the comments!",
            at(2024, 1, 14, 15, 45),
            28,
            "1",
            &["webdev", "trends", "react", "css"],
        ),
        post(
            "3",
            "Building Better User Experiences",
            "User experience isn't just about pretty interfaces. It's about creating meaningful \
             interactions that solve real problems.\n\n\
             Some key principles I follow:\n\
             - Start with user research\n\
             - Design for accessibility\n\
             - Test early and often\n\
             - Keep it simple\n\
             - Listen to feedback\n\n\
             The best products are those that users don't even think about - they just work seamlessly.\n\n\
             What's your approach to UX design?",
            at(2024, 1, 13, 9, 20),
            15,
            "4",
            &["ux", "design", "accessibility", "research"],
        ),
        post(
            "4",
            "Just Launched: New Tab Feature!",
            "Excited to announce that we've just added tab functionality to our blog platform!\n\n\
             Now you can:\n\
             View posts by \"New\" (latest first)\n\
             Check \"Best\" posts (most upvoted)\n\
             See \"Today\" posts (submitted today)\n\n\
             This makes it so much easier to discover content that matters to you. Try switching \
             between the tabs and let me know what you think!",
            reference_day(16, 0),
            67,
            "1",
            &["feature", "launch", "tabs", "ui"],
        ),
        post(
            "5",
            "Quick Tips for Better Code Reviews",
            "Code reviews are crucial for maintaining quality. Here are some quick tips:\n\n\
             Be thorough but kind - Focus on the code, not the person\n\
             Look for logic errors - Don't just check syntax\n\
             Share knowledge - Explain why you suggest changes\n\
             Be timely - Don't let PRs sit too long\n\
             Focus on what matters - Not every style preference needs a comment\n\n\
             What's your code review process like?",
            reference_day(14, 30),
            23,
            "5",
            &["codereview", "tips", "quality", "collaboration"],
        ),
        post(
            "6",
            "Morning Coffee Thoughts",
            "Sitting with my morning coffee and thinking about how much I love building things that \
             people actually use.\n\n\
             There's something magical about creating a feature, shipping it, and then seeing real \
             people interact with it. Every click, every comment, every upvote represents a real \
             human on the other side.\n\n\
             What motivates you in your work?",
            reference_day(8, 15),
            89,
            "1",
            &["motivation", "coffee", "reflection", "community"],
        ),
    ]
}

pub fn comments() -> Vec<Comment> {
    vec![
        comment(
            "1",
            "1",
            "This is exactly what the community needed! Looking forward to more discussions about React and Next.js.",
            at(2024, 1, 15, 11, 30),
            8,
        ),
        comment(
            "2",
            "1",
            "Love the welcoming atmosphere here. I'd love to see more content about TypeScript best practices!",
            at(2024, 1, 15, 12, 15),
            5,
        ),
        comment(
            "3",
            "2",
            "Server Components have been a game-changer for my projects. The performance improvements are incredible!",
            at(2024, 1, 14, 16, 30),
            12,
        ),
        comment(
            "4",
            "2",
            "CSS Container Queries are so underrated. They've simplified my responsive design workflow significantly.",
            at(2024, 1, 14, 17, 45),
            7,
        ),
        comment(
            "5",
            "3",
            "User research is definitely the foundation of good UX. No amount of beautiful design can fix a misunderstood problem.",
            at(2024, 1, 13, 10, 15),
            9,
        ),
        comment(
            "6",
            "4",
            "Love the new tabs! The \"Best\" tab is perfect for discovering quality content.",
            reference_day(12, 45),
            15,
        ),
        comment(
            "7",
            "5",
            "Great tips! I especially agree about being timely with reviews. Nothing kills momentum like stale PRs.",
            reference_day(15, 20),
            6,
        ),
        comment(
            "8",
            "6",
            "This resonates so much! There's nothing like seeing your creation come to life through user interactions.",
            reference_day(9, 30),
            11,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::ReferenceWindow;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let post_ids: HashSet<String> = posts().into_iter().map(|p| p.id).collect();
        assert_eq!(post_ids.len(), posts().len());
        let comment_ids: HashSet<String> = comments().into_iter().map(|c| c.id).collect();
        assert_eq!(comment_ids.len(), comments().len());
    }

    #[test]
    fn test_references_resolve() {
        let community_ids: HashSet<String> = communities().into_iter().map(|c| c.id).collect();
        let post_ids: HashSet<String> = posts().into_iter().map(|p| p.id).collect();

        assert!(posts().iter().all(|p| community_ids.contains(&p.community_id)));
        assert!(comments().iter().all(|c| post_ids.contains(&c.post_id)));
    }

    #[test]
    fn test_three_posts_fall_on_reference_day() {
        let window = ReferenceWindow::default();
        let today = posts()
            .into_iter()
            .filter(|p| window.contains(p.created_at))
            .count();
        assert_eq!(today, 3);
    }

    #[test]
    fn test_search_text_word_does_not_leak() {
        // Guards the feed search tests, which rely on this word appearing once
        let hits = posts()
            .iter()
            .filter(|p| p.matches_text("code reviews"))
            .count();
        assert_eq!(hits, 1);
    }
}
