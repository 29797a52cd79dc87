//! Static catalog of AR filters, one list per gallery page.
//!
//! Filters are links to lenses on Snap's platform; nothing here renders AR.

use picflick_types::filter::{ArFilter, FilterCategory};

static FACE_FILTERS: [ArFilter; 3] = [
    ArFilter {
        id: 1,
        name: "Warrior Mask",
        short_desc: "Overlays a fierce digital warrior mask.",
        long_desc: "Digitally applies an intricate mask reminiscent of ancient warriors, often featuring strong lines, metallic textures, and intense expressions. This filter can evoke feelings of power, courage, and strength.",
        image_url: "https://nagina-in.com/wp-content/uploads/2021/10/B08KQBVX26-3.jpg",
        rating: 4.5,
        link: "https://lens.snap.com/experience/b0f22f2c-edce-4eee-af93-09ffa6364d17",
    },
    ArFilter {
        id: 2,
        name: "2D Colourful Tribal Mask",
        short_desc: "Applies a flat, vibrant tribal-inspired mask.",
        long_desc: "Overlays a two-dimensional mask adorned with colorful tribal patterns and designs, often drawing inspiration from various indigenous cultures. This filter can add an ethnic, artistic, and vibrant touch to your appearance.",
        image_url: "https://img.freepik.com/free-vector/colourful-2d-venetian-carnival-mask-isolated-white-background_52683-53727.jpg?semt=ais_hybrid&w=740",
        rating: 4.2,
        link: "https://lens.snap.com/experience/1c71712a-297c-4108-988d-f9a493956732",
    },
    ArFilter {
        id: 3,
        name: "Baseball Cap",
        short_desc: "Places a virtual baseball cap on your head.",
        long_desc: "Digitally adds a baseball cap to your head in real-time. Often customizable with different colors and logos, this filter provides a casual, sporty, and cool look for your photos and videos.",
        image_url: "https://cdn.storeden.net/secache/66dfff8fbe7ea04a402dba46",
        rating: 4.5,
        link: "https://lens.snap.com/experience/7e8dc808-cd13-4692-8516-2aa88464a9f5",
    },
];

static FACE_DEFORM: [ArFilter; 3] = [
    ArFilter {
        id: 1,
        name: "Face Warp",
        short_desc: "Distorts facial features in an exaggerated way.",
        long_desc: "Applies real-time warping effects to your face, stretching, squishing, or otherwise exaggerating your features for a humorous effect. This filter is perfect for creating funny and silly content.",
        image_url: "https://play-lh.googleusercontent.com/skspILPcvz4rxjETLXujZipYW8BV3zjxhqipLnyS-mAUybKQYIfSsLjikRVjmjn3NjyK=w240-h480-rw",
        rating: 4.5,
        link: "https://lens.snap.com/experience/8727455b-c7b9-4b88-b9a0-1639779c5129",
    },
    ArFilter {
        id: 2,
        name: "Big Eye",
        short_desc: "Enlarges the user's eyes for a cartoonish look.",
        long_desc: "Dramatically increases the size of your eyes, creating a wide-eyed, cartoonish, and sometimes surreal appearance. This filter can evoke feelings of surprise, cuteness, or whimsy.",
        image_url: "https://play-lh.googleusercontent.com/9MTaql19BpqhdGRuVFAXEZJiee4gGc-md8wugTkrLWkLrfQvFX_QnfJFax7sAVx7pUA",
        rating: 4.2,
        link: "https://lens.snap.com/experience/1863ad47-6a0c-46db-bd98-d0ed71d44f45",
    },
    ArFilter {
        id: 3,
        name: "Green Eye",
        short_desc: "Changes the user's eye color to green.",
        long_desc: "Digitally alters the color of your eyes to various shades of green, enhancing your natural beauty or creating a more mysterious and alluring look. This filter can evoke feelings of enchantment and natural beauty.",
        image_url: "https://lasikomaha.com/wp-content/uploads/2021/03/blog-KVgeneral-green-eye-facts_FeatureImg-copy.jpg",
        rating: 4.5,
        link: "https://lens.snap.com/experience/26333e32-0691-445c-bfb9-2da54cef38c8",
    },
];

static OVERLAYS: [ArFilter; 4] = [
    ArFilter {
        id: 1,
        name: "Snow Effect",
        short_desc: "Adds falling snow to the scene.",
        long_desc: "Overlays realistic falling snow on your camera view, creating a serene and wintery atmosphere. Perfect for capturing cozy moments or adding a touch of magic to your surroundings.",
        image_url: "https://p.bdir.in/img/jQuery-Plugin-For-Snowfall-Effect-with-Rotating-Snowflakes.png",
        rating: 4.5,
        link: "https://lens.snap.com/experience/d808edde-70e2-4d35-91b4-49ca8b5e2a65",
    },
    ArFilter {
        id: 2,
        name: "Blurred Edge",
        short_desc: "Blurs the edges of the view to focus on the center.",
        long_desc: "Applies a soft blur effect to the periphery of your camera view, drawing attention to the central subject. This filter can create a dreamy, artistic, or introspective feel to your photos and videos.",
        image_url: "https://d1hjkbq40fs2x4.cloudfront.net/2016-07-11/files/slow-shutter-sample_1304.jpg",
        rating: 4.2,
        link: "https://lens.snap.com/experience/a24df3e9-717f-4e7d-9fd5-66c097068b4d",
    },
    ArFilter {
        id: 3,
        name: "Rain Effect",
        short_desc: "Simulates a rainy day with visual and sometimes audio effects.",
        long_desc: "Overlays realistic rain droplets on your screen, often accompanied by the subtle sound of rain, to create a melancholic, reflective, or cozy ambiance. Ideal for artistic expression or setting a specific mood.",
        image_url: "https://freerangestock.com/sample/25037/raining-light-effect.jpg",
        rating: 4.5,
        link: "https://lens.snap.com/experience/b5527b3b-32f2-4d2d-b16e-6581031baa9d",
    },
    ArFilter {
        id: 4,
        name: "Distorted Wave Effect",
        short_desc: "Creates a wavy or rippling distortion across the image.",
        long_desc: "Applies a dynamic wave-like distortion to your camera feed, producing a fluid, unreal, and sometimes psychedelic visual effect. Great for adding a unique and dynamic touch to your content.",
        image_url: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcRjnr0XEExr7CU0Pa22oPHutMre9fWUKWxIBBpMtL1fTW3LR1_WUrzS8F6jtNHb2sv-o6I&usqp=CAU",
        rating: 4.5,
        link: "https://lens.snap.com/experience/a841107c-7f8a-4724-989f-a8db8bc54c83",
    },
];

pub fn filters(category: FilterCategory) -> &'static [ArFilter] {
    match category {
        FilterCategory::FaceFilters => &FACE_FILTERS,
        FilterCategory::FaceDeform => &FACE_DEFORM,
        FilterCategory::Overlays => &OVERLAYS,
    }
}

pub fn find(category: FilterCategory, id: u32) -> Option<&'static ArFilter> {
    filters(category).iter().find(|f| f.id == id)
}

/// First filter whose name contains `query`, ignoring case.
pub fn search(category: FilterCategory, query: &str) -> Option<&'static ArFilter> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    filters(category)
        .iter()
        .find(|f| f.name.to_lowercase().contains(&needle))
}
