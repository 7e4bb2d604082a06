//! The curated CAD/AEC glossary, Chinese to Japanese.
//!
//! Order is significant: partial matching picks the first entry whose key
//! occurs in the text. Repeated keys keep their first position and take the
//! last value.

pub(crate) const CAD_TERMS: &[(&str, &str)] = &[
    // CAD vocabulary
    ("图层", "レイヤー"),
    ("块", "ブロック"),
    ("属性", "属性"),
    ("标注", "寸法"),
    ("文字", "テキスト"),
    ("多行文字", "マルチテキスト"),
    ("插入点", "挿入点"),
    ("旋转", "回転"),
    ("比例", "スケール"),
    ("线型", "線種"),
    ("颜色", "色"),
    ("线宽", "線幅"),
    // Drawing types
    ("平面图", "平面図"),
    ("立面图", "立面図"),
    ("剖面图", "断面図"),
    ("详图", "詳細図"),
    ("总平面图", "配置図"),
    ("结构图", "構造図"),
    ("施工图", "施工図"),
    // Structure
    ("混凝土", "コンクリート"),
    ("钢筋", "鉄筋"),
    ("钢结构", "鉄骨構造"),
    ("基础", "基礎"),
    ("柱", "柱"),
    ("梁", "梁"),
    ("板", "スラブ"),
    ("墙", "壁"),
    ("门", "ドア"),
    ("窗", "窓"),
    // General
    ("测试", "テスト"),
    ("你好", "こんにちは"),
    ("中国", "中国"),
    ("日本", "日本"),
    ("翻译", "翻訳"),
    ("项目", "プロジェクト"),
    ("设计", "設計"),
    ("图纸", "図面"),
    ("建筑", "建築"),
    ("结构", "構造"),
    ("机械", "機械"),
    ("电气", "電気"),
    ("给排水", "給排水"),
    ("暖通", "暖房換気"),
    // Title block
    ("项目名称", "プロジェクト名"),
    ("图纸编号", "図面番号"),
    ("工程师", "エンジニア"),
    ("日期", "日付"),
    ("单位", "単位"),
    ("长度", "長さ"),
    ("宽度", "幅"),
    ("高度", "高さ"),
    ("面积", "面積"),
    ("体积", "体積"),
    // Labelled attribute values
    ("图层: 建筑平面图", "レイヤー: 建築平面図"),
    ("块: 柱子", "ブロック: 柱"),
    ("标注: 1:100", "寸法: 1:100"),
    ("文字: 测试文本", "テキスト: テスト文章"),
    (
        "多行文字: 这是一个测试多行文本示例",
        "マルチテキスト: これはテスト用の複数行テキスト例です",
    ),
    ("插入点: (0,0,0)", "挿入点: (0,0,0)"),
    ("旋转: 90度", "回転: 90度"),
    ("比例: 1:50", "スケール: 1:50"),
    ("线型: CONTINUOUS", "線種: CONTINUOUS"),
    ("颜色: RED", "色: 赤"),
    ("线宽: 0.5mm", "線幅: 0.5mm"),
    ("项目名称: 测试项目", "プロジェクト名: テストプロジェクト"),
    ("图纸编号: A-001", "図面番号: A-001"),
    ("设计: 工程师", "設計: エンジニア"),
    ("日期: 2024-01-01", "日付: 2024-01-01"),
    ("比例: 1:100", "スケール: 1:100"),
    ("单位: 毫米", "単位: ミリメートル"),
    // Bill of materials headers
    ("备 注", "備考"),
    ("合 计", "合計"),
    ("质 量 kg", "質量 kg"),
    ("单 件", "単品"),
    ("材 料", "材料"),
    ("数量", "数量"),
    ("名 称 及 规 格", "名称及び仕様"),
    ("序号", "番号"),
    ("图号、型号或标准号", "図番、型式又は標準番号"),
    ("总   页,第   页", "総　頁,第　頁"),
    // Paint line layout
    ("工艺平面图", "工程平面図"),
    ("塑料件涂装线", "プラスチック部品塗装ライン"),
    ("货淋室", "エアシャワールーム"),
    ("快速卷帘门", "高速巻きシャッター"),
    ("接地", "アース"),
    ("涂装线技术参数", "塗装ライン技術パラメータ"),
    ("工件名称", "ワーク名"),
    ("卡车保险杠", "トラックバンパー"),
    ("最大重量", "最大重量"),
    ("输送方式", "搬送方式"),
    ("工艺台车", "工程台車"),
    ("人工推拉", "手動押し引き"),
    ("涂装工艺流程", "塗装工程フロー"),
    ("上件", "ワークセット"),
    ("喷漆", "塗装"),
    ("油漆烘干", "塗装乾燥"),
    ("货淋室外购", "エアシャワールーム外注"),
    ("进出口", "出入口"),
    ("电动卷帘门", "電動巻きシャッター"),
    ("喷漆室", "塗装室"),
    ("干式纸盒", "ドライ式ボックス"),
    ("侧排风", "側面排気"),
    ("送风机组", "送風ユニット"),
    ("排风机组", "排風ユニット"),
    ("二层平台", "2階プラットフォーム"),
    ("室体", "ルーム本体"),
    ("镀锌板", "亜鉛メッキ板"),
    ("手动推拉门", "手動引き戸"),
    ("烘干", "乾燥"),
    ("柴油加热炉", "ディーゼル加熱炉"),
    ("燃烧器", "バーナー"),
    ("烘干温度", "乾燥温度"),
    ("烘干时间", "乾燥時間"),
    ("热风循环加热", "熱風循環加熱"),
    ("上送风下回风", "上送風下還風"),
    ("旋转门", "回転ドア"),
    ("人工开启", "手動開閉"),
    ("内腔高度", "内部高さ"),
    ("遮蔽工作台", "マスキング作業台"),
    ("客户自备", "客先支給"),
    ("建议厂房内净空高度", "推奨建屋内クリアランス高さ"),
    ("卡车", "トラック"),
    ("保险杠", "バンパー"),
    ("塑料件", "プラスチック部品"),
    ("尺寸", "寸法"),
    ("重量", "重量"),
    ("喷漆台", "塗装台"),
    ("台车", "台車"),
    ("烘干室", "乾燥室"),
    ("钢平台", "鋼製プラットフォーム"),
    ("时间", "時間"),
    ("厂家", "メーカー"),
    ("按图制作", "図面通り製作"),
    ("布置", "配置"),
    ("机组", "ユニット"),
    ("顶部", "天井"),
    ("温度", "温度"),
    ("热风", "熱風"),
    ("循环", "循環"),
    ("加热", "加熱"),
    ("送风", "送風"),
    ("回风", "還風"),
    ("开启", "開閉"),
    ("控制", "制御"),
    ("左右", "左右"),
    ("工作台", "作業台"),
    ("自备", "自前準備"),
    ("建议", "推奨"),
    ("厂房", "建屋"),
    ("内", "内部"),
    ("净空", "クリアランス"),
    // Complete technical phrases
    ("长2000X宽500X高600mm", "長2000X幅500X高600mm"),
    ("最大重量 5kg/只", "最大重量5kg/個"),
    ("烘干时间45min/车", "乾燥時間45分/台車"),
    ("烘干温度80℃", "乾燥温度80℃"),
    ("建议厂房内净空高度6.5m", "推奨建屋内クリアランス高さ6.5m"),
    ("卡车保险杠等塑料件", "トラックバンパー等プラスチック部品"),
    ("工艺台车运输", "工程台車搬送"),
    (
        "单个保险杠放在喷漆室内设喷漆台进行喷涂",
        "個別バンパーを塗装室内の塗装台に設置して塗装実施",
    ),
    ("货淋室外购", "シャワーブース外注"),
    ("建议厂家按图制作", "メーカーに図面通り製作を依頼"),
    ("进出口采用电动卷帘门", "出入口に電動シャッター扉を採用"),
    ("喷漆室采用干式纸盒", "塗装室にドライ式ペーパーボックスを採用"),
    ("侧排风结构", "側面排風構造"),
    ("排风机组均布置在二层平台上", "排風ユニットを2階プラットフォームに配置"),
    ("室体采用镀锌板结构", "ルーム本体に亜鉛メッキ鋼板構造を採用"),
    ("采用手动推拉门", "手動スライド扉を採用"),
    ("烘干采用柴油加热炉", "乾燥にディーゼル加熱炉を採用"),
    (
        "燃烧器放在烘干室顶部二层钢平台上",
        "バーナーを乾燥室天井の2階鋼製プラットフォームに設置",
    ),
    ("上送风下回风", "上側送風、下側還風"),
    ("进出口采用旋转门", "出入口に回転扉を採用"),
    ("烘干室内腔高度控制在2m左右", "乾燥室内部高さを2m前後に制御"),
    ("工艺台车客户自备", "工程台車は客先支給"),
];
